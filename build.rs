// build.rs
//
// Probes the compiler once at build time and surfaces the result as
// environment constants. The library exposes these through
// `target::compiler` so downstream code never shells out to rustc itself.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let verbose = rustc_verbose_version().unwrap_or_default();

    let banner = verbose.lines().next().unwrap_or("rustc (unknown)");
    let semver = field(&verbose, "release: ").unwrap_or("0.0.0");
    let host = field(&verbose, "host: ").unwrap_or("unknown");
    let commit = field(&verbose, "commit-hash: ").unwrap_or("unknown");

    println!("cargo:rustc-env=SWAB_RUSTC_VERSION={}", banner);
    println!("cargo:rustc-env=SWAB_RUSTC_SEMVER={}", semver);
    println!("cargo:rustc-env=SWAB_RUSTC_CHANNEL={}", channel(semver));
    println!("cargo:rustc-env=SWAB_RUSTC_HOST={}", host);
    println!("cargo:rustc-env=SWAB_RUSTC_COMMIT={}", commit);
}

/// Output of `rustc -vV` for the compiler cargo selected for this build.
fn rustc_verbose_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

/// Value of a `key: value` line in the `-vV` output.
fn field<'a>(verbose: &'a str, key: &str) -> Option<&'a str> {
    verbose
        .lines()
        .find_map(|line| line.strip_prefix(key))
        .map(str::trim)
}

fn channel(semver: &str) -> &'static str {
    if semver.contains("nightly") || semver.contains("dev") {
        "nightly"
    } else if semver.contains("beta") {
        "beta"
    } else {
        "stable"
    }
}
