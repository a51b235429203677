//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod proxy;
pub mod usb;

pub use proxy::proxy_task;
pub use usb::{hid_writer_task, usb_device_task};
