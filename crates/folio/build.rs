//! Build script for folio.
//!
//! Stamps the version string shown by `folio --version` with the commit
//! and build date. Source tarballs have no `.git`, so packagers can pass
//! the commit through `FOLIO_GIT_HASH` instead.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    let git_hash = std::env::var("FOLIO_GIT_HASH")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            let hash = git(&["rev-parse", "--short", "HEAD"]).filter(|s| !s.is_empty())?;
            // Uncommitted edits under crates/ change what gets built
            let dirty = git(&["status", "--porcelain", "--", "crates"])
                .is_some_and(|s| !s.is_empty());
            Some(if dirty { format!("{}-dirty", hash) } else { hash })
        })
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=GIT_HASH={}", git_hash);

    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-env-changed=FOLIO_GIT_HASH");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
