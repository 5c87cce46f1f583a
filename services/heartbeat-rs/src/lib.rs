//! Dummy workload that writes one canned status line every few seconds.
//! Handy for exercising log shippers and process supervisors.

pub mod config;
pub mod emitter;
pub mod error;
pub mod message;
pub mod rng;

pub use config::Config;
pub use emitter::Emitter;
pub use error::{HeartbeatError, Result};
pub use message::{Status, Stream};
pub use rng::{BatchSource, XorShift32};
