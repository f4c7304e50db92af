//! Build script to inject version, git SHA and the remote API URL at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - HOTEL_ADMIN_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - HOTEL_ADMIN_GIT_SHA: Git commit SHA (defaults to GITHUB_SHA, then git rev-parse, then "unknown")
//! - HOTEL_API_URL: Base URL of the hotel API, read by `config::api_base_url`

use std::process::Command;

fn main() {
    let version = std::env::var("HOTEL_ADMIN_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=HOTEL_ADMIN_VERSION={}", version);

    let git_sha = std::env::var("HOTEL_ADMIN_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=HOTEL_ADMIN_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=HOTEL_ADMIN_VERSION");
    println!("cargo:rerun-if-env-changed=HOTEL_ADMIN_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    println!("cargo:rerun-if-env-changed=HOTEL_API_URL");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}
