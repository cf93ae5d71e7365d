use std::process::Command;

/// Run `git <args>`, returning trimmed stdout on success
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let git_hash = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) => {
            // `git diff --quiet` exits non-zero on a dirty tree
            let dirty = git(&["diff", "--quiet"]).is_none();
            if dirty { format!("{}-dirty", hash) } else { hash }
        }
        None => "unknown".to_string(),
    };

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
