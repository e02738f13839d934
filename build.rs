use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Expose the nearest release tag so the UI can show it instead of the
    // bare Cargo version. Absent git or tags, the fallback lives in code.
    let described = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output();

    if let Ok(output) = described {
        if output.status.success() {
            if let Ok(tag) = String::from_utf8(output.stdout) {
                let tag = tag.trim();
                if !tag.is_empty() {
                    println!("cargo:rustc-env=GIT_TAG={tag}");
                }
            }
        }
    }
}
