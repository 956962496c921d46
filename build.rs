use std::env;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                Some(String::from_utf8_lossy(&o.stdout).trim().to_string())
            } else {
                None
            }
        })
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-changed=build.rs");

    // Full commit hash
    let revision = git(&["rev-parse", "HEAD"]).filter(|s| !s.is_empty());
    if let Some(rev) = &revision {
        println!("cargo:rustc-env=VERINFO_VCS_REVISION={rev}");
    }

    // Commit time (UTC, RFC3339)
    let commit_time = git(&["log", "-1", "--format=%ct"])
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true));
    if let Some(t) = commit_time {
        println!("cargo:rustc-env=VERINFO_VCS_TIME={t}");
    }

    // Dirty working tree; only meaningful inside a checkout
    if revision.is_some() {
        if let Some(status) = git(&["status", "--porcelain"]) {
            let modified = !status.is_empty();
            println!("cargo:rustc-env=VERINFO_VCS_MODIFIED={modified}");
        }
    }

    // Compiler version
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string());
    if let Some(v) = rustc_version {
        println!("cargo:rustc-env=VERINFO_RUSTC_VERSION={v}");
    }
}
