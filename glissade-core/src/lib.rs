//! Board-agnostic core logic for the Glissade pointer proxy
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (pointer device, command link)
//! - Easing curve evaluation
//! - Motion-interpolation engine (the single in-flight movement)
//! - Cooperative service loop composing decoder, validator and engine
//!
//! Time is always an injected `u32` millisecond value, never read from a
//! global clock, so everything here runs deterministically on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod easing;
pub mod motion;
pub mod proxy;
pub mod traits;

pub use motion::MotionEngine;
pub use proxy::MouseProxy;
