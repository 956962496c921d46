#![no_main]
use libfuzzer_sys::fuzz_target;
use verinfo::buildinfo::{BuildInfo, BuildMetadata, BuildSetting, VersionInfo};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    revision: String,
    time: String,
    modified: String,
    version: String,
}

fuzz_target!(|input: Input| {
    // Provider should never panic on arbitrary metadata
    let metadata = BuildMetadata {
        main_version: String::new(),
        toolchain_version: String::new(),
        settings: vec![
            BuildSetting::new("vcs.revision", input.revision),
            BuildSetting::new("vcs.time", input.time),
            BuildSetting::new("vcs.modified", input.modified),
        ],
    };
    let info = BuildInfo::new(metadata, input.version);
    let _ = info.version();
    let _ = info.modified();
});
