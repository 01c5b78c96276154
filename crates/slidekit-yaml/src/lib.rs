//! YAML manifests of named slider configurations.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::Manifest;
