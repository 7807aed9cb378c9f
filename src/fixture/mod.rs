//! Fixture batch generation: configuration, `.mtx` file I/O, and the
//! per-trial driver loop.

pub mod config;
pub mod error;
pub mod generate;
pub mod io;

pub use config::FixtureConfig;
pub use error::Error;
pub use generate::{generate, generate_with_progress};
