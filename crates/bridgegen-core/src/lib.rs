mod error;
pub use error::Error;

pub mod name;

pub mod graphql;

pub mod boiler;

pub mod model;

mod builder;
pub use builder::{Builder, ConvertCatalog};

mod config;
pub use config::Config;

/// A Result type alias that uses bridgegen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
