//! API Lambda handler and request processing

pub mod event;
pub mod handler;
pub mod response;

// Re-export the main handler for convenience
pub use handler::{GifHandler, function_handler};
