//! Domain logic - pure version and release values independent of any provider

pub mod prerelease;
pub mod release;
pub mod version;

pub use prerelease::{Identifier, Prerelease};
pub use release::ReleaseRecord;
pub use version::SemVersion;
