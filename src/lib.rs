//! repforge - workout catalog service
//!
//! A fixed exercise catalog plus the filtering, sampling and composition
//! engine that turns it into workouts, weekly plans, routines, supersets and
//! HIIT sessions. Custom exercises, favorites and history live in memory.

pub mod analytics;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod error;
pub mod exercises;
pub mod filter;
pub mod params;
pub mod routines;
pub mod sampler;
pub mod server;
pub mod store;
pub mod tips;

pub use catalog::Catalog;
pub use error::{ApiError, ApiResult};
pub use store::Store;
