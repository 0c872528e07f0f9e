pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod output;
pub mod provider;
pub mod resolver;
pub mod warnings;

pub use error::{LatestReleaseError, Result};
