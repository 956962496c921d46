/// Read-only view over the metadata a binary reports about its own build.
///
/// All accessors are total: a provider that cannot determine a field returns an
/// empty string (or `false` for [`VersionInfo::modified`]) instead of failing.
pub trait VersionInfo: Send + Sync {
    /// The version number.
    fn version(&self) -> String;
    /// The revision identifier of the commit.
    fn revision(&self) -> String;
    /// The commit time, in RFC3339 format.
    fn time(&self) -> String;
    /// Whether the source tree had uncommitted local changes.
    fn modified(&self) -> bool;
    /// The version of the compiler toolchain that built the binary.
    fn go_version(&self) -> String;
}
