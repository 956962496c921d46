pub mod metadata;
pub mod ports;
pub mod provider;
pub mod pseudo;

pub use metadata::{BuildMetadata, BuildSetting};
pub use ports::VersionInfo;
pub use provider::BuildInfo;
