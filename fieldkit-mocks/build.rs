//! Stylesheets for the gallery: the shared base CSS from fieldkit-ui and the
//! Tailwind output generated from `tailwind.css`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let assets = root.join("assets");

    sync_base_css(&root, &assets);
    build_tailwind(&root, &assets);
}

/// fieldkit-ui owns `main.css`; the gallery serves a copy from its own assets
fn sync_base_css(root: &Path, assets: &Path) {
    let source = root.join("../fieldkit-ui/assets/main.css");
    println!("cargo:rerun-if-changed={}", source.display());

    if !source.exists() {
        println!("cargo:warning=fieldkit-ui/assets/main.css missing, keeping the local copy");
        return;
    }
    if let Err(e) = fs::copy(&source, assets.join("main.css")) {
        panic!("could not sync {}: {e}", source.display());
    }
}

fn build_tailwind(root: &Path, assets: &Path) {
    let input = root.join("tailwind.css");
    let output = assets.join("tailwind.css");
    println!("cargo:rerun-if-changed={}", input.display());
    println!("cargo:rerun-if-changed={}", root.join("src").display());
    println!(
        "cargo:rerun-if-changed={}",
        root.join("../fieldkit-ui/src").display()
    );

    let cli = root.join("node_modules/.bin/tailwindcss");
    if !cli.exists() {
        // asset! needs the file present even when it is unprocessed
        println!("cargo:warning=tailwindcss not found, run `npm install` in fieldkit-mocks for styled output");
        if !output.exists() {
            if let Err(e) = fs::copy(&input, &output) {
                panic!("could not write {}: {e}", output.display());
            }
        }
        return;
    }

    let result = Command::new(&cli)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .current_dir(root)
        .output()
        .unwrap_or_else(|e| panic!("could not start {}: {e}", cli.display()));

    if !result.status.success() {
        panic!(
            "tailwindcss exited with {}\n{}",
            result.status,
            String::from_utf8_lossy(&result.stderr)
        );
    }
}
