// Captures toolchain and dependency versions for the `check-env` binary.
// rustc comes from `$RUSTC --version`, crate versions from Cargo.lock.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const TRACKED: &[(&str, &str)] = &[("image", "RED_TRACKER_IMAGE_VERSION"), ("minifb", "RED_TRACKER_MINIFB_VERSION")];

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=RED_TRACKER_RUSTC_VERSION={rustc_version}");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let lock_path = Path::new(&manifest_dir).join("Cargo.lock");
    println!("cargo:rerun-if-changed={}", lock_path.display());
    println!("cargo:rerun-if-changed=build.rs");

    let lock = fs::read_to_string(&lock_path).unwrap_or_default();
    for (name, var) in TRACKED {
        let version = locked_version(&lock, name).unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env={var}={version}");
    }
}

/// Find `version = "..."` of the first `[[package]]` entry named `name`.
fn locked_version(lock: &str, name: &str) -> Option<String> {
    let needle = format!("name = \"{name}\"");
    let mut lines = lock.lines();
    while let Some(line) = lines.next() {
        if line.trim() != needle {
            continue;
        }
        for next in lines.by_ref() {
            let next = next.trim();
            if next.is_empty() || next.starts_with("[[") {
                break;
            }
            if let Some(rest) = next.strip_prefix("version = ") {
                return Some(rest.trim_matches('"').to_string());
            }
        }
    }
    None
}
