//! Capability traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod link;
pub mod pointer;

pub use link::{CommandLink, ResponseSink};
pub use pointer::{PointerDevice, MAX_STEP};
