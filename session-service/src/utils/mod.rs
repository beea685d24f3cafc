pub mod clock;
pub mod config;
pub mod consts;

pub use clock::*;
pub use config::{Config, ConfigError};
pub use consts::*;
