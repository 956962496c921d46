pub const KEY_VCS_REVISION: &str = "vcs.revision";
pub const KEY_VCS_TIME: &str = "vcs.time";
pub const KEY_VCS_MODIFIED: &str = "vcs.modified";

/// One key/value pair recorded by the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSetting {
    pub key: String,
    pub value: String,
}

impl BuildSetting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Snapshot of the metadata embedded into a binary at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Version of the main package, e.g. `v0.1.0`.
    pub main_version: String,
    /// Compiler version string, e.g. `rustc 1.80.0 (051478957 2024-07-21)`.
    pub toolchain_version: String,
    pub settings: Vec<BuildSetting>,
}

impl BuildMetadata {
    /// Metadata captured by `build.rs` for this binary.
    ///
    /// Settings the build script could not determine (no git checkout, no
    /// compiler output) are simply absent.
    pub fn embedded() -> Self {
        let mut settings = Vec::new();
        let embedded = [
            (KEY_VCS_REVISION, option_env!("VERINFO_VCS_REVISION")),
            (KEY_VCS_TIME, option_env!("VERINFO_VCS_TIME")),
            (KEY_VCS_MODIFIED, option_env!("VERINFO_VCS_MODIFIED")),
        ];
        for (key, value) in embedded {
            if let Some(v) = value {
                settings.push(BuildSetting::new(key, v));
            }
        }

        Self {
            main_version: format!("v{}", env!("CARGO_PKG_VERSION")),
            toolchain_version: option_env!("VERINFO_RUSTC_VERSION")
                .unwrap_or_default()
                .to_string(),
            settings,
        }
    }

    /// Value of the first setting named `key`.
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.value.as_str())
    }
}

/// Parses a boolean the way build settings spell it.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; anything else
/// is rejected.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
