use std::process::Command;
use chrono::Local;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    // Packagers building from a tarball can pin the hash explicitly
    println!("cargo:rerun-if-env-changed=VOKABEL_BUILD_HASH");
    if let Ok(pinned) = std::env::var("VOKABEL_BUILD_HASH") {
        println!("cargo:rustc-env=BUILD_HASH={pinned}");
        return;
    }

    let build_hash = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) => {
            // Tracked changes only; untracked sample files don't count
            let dirty = Command::new("git")
                .args(["diff", "--quiet", "HEAD"])
                .status()
                .map(|s| !s.success())
                .unwrap_or(false);
            if dirty {
                format!("{hash}-dirty-{}", Local::now().format("%Y%m%d-%H%M%S"))
            } else {
                hash
            }
        }
        None => "unknown".to_string(),
    };

    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // .git sits at the workspace root, two levels up
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
