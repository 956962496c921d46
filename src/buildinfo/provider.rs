use crate::buildinfo::metadata::{
    parse_bool, BuildMetadata, KEY_VCS_MODIFIED, KEY_VCS_REVISION, KEY_VCS_TIME,
};
use crate::buildinfo::ports::VersionInfo;
use crate::buildinfo::pseudo::pseudo_version;
use tracing::debug;

/// [`VersionInfo`] backed by the metadata embedded at build time.
///
/// The version number resolves in order: explicit override, pseudo-version
/// synthesised from `vcs.time` + `vcs.revision`, then the main package version.
#[derive(Debug, Clone, Default)]
pub struct BuildInfo {
    metadata: BuildMetadata,
    version: Option<String>,
}

impl BuildInfo {
    /// Provider over `metadata` with an explicit version number.
    ///
    /// An empty `version` counts as no override.
    pub fn new(metadata: BuildMetadata, version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            metadata,
            version: (!version.is_empty()).then_some(version),
        }
    }

    /// Provider over `metadata` without an override.
    pub fn from_metadata(metadata: BuildMetadata) -> Self {
        Self {
            metadata,
            version: None,
        }
    }

    /// Provider over this binary's embedded metadata, without an override.
    pub fn embedded() -> Self {
        Self::from_metadata(BuildMetadata::embedded())
    }

    fn pseudo_version(&self) -> Option<String> {
        pseudo_version(&self.time(), &self.revision())
    }
}

impl VersionInfo for BuildInfo {
    fn version(&self) -> String {
        if let Some(v) = &self.version {
            debug!(version = %v, "using explicit version");
            return v.clone();
        }
        if let Some(v) = self.pseudo_version() {
            debug!(version = %v, "using pseudo-version");
            return v;
        }
        debug!(version = %self.metadata.main_version, "using main package version");
        self.metadata.main_version.clone()
    }

    fn revision(&self) -> String {
        self.metadata
            .setting(KEY_VCS_REVISION)
            .unwrap_or_default()
            .to_string()
    }

    fn time(&self) -> String {
        self.metadata
            .setting(KEY_VCS_TIME)
            .unwrap_or_default()
            .to_string()
    }

    fn modified(&self) -> bool {
        self.metadata
            .setting(KEY_VCS_MODIFIED)
            .and_then(parse_bool)
            .unwrap_or(false)
    }

    fn go_version(&self) -> String {
        self.metadata.toolchain_version.clone()
    }
}
