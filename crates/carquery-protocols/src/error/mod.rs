//! Error types for the carquery protocol layer.

mod catalog;
mod client;
mod format;
mod relay;
mod selection;
mod window;

pub use catalog::*;
pub use client::*;
pub use format::*;
pub use relay::*;
pub use selection::*;
pub use window::*;
