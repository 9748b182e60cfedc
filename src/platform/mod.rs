//! Platform boundary
//!
//! Everything that crosses between the widget and its host page:
//! - Inbound score messages (`message`)
//! - Frame loop start/pause control (`frame`)

pub mod frame;
pub mod message;

pub use frame::{FrameController, FrameSwitch};
pub use message::{HostMessage, handle_message};
