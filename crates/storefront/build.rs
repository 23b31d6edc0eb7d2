//! Build script for the storefront crate.
//!
//! Fingerprints static assets so templates can reference immutable,
//! content-addressed URLs (`main.3f2a91bc.css`).

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Assets to fingerprint: (path under `static/`, env var receiving the hash).
const ASSETS: &[(&str, &str)] = &[("css/main.css", "CSS_HASH")];

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");

    for (asset, env_var) in ASSETS {
        fingerprint(&static_dir, asset, env_var);
    }
}

/// Hash one asset and copy it next to itself under `derived/` with the hash
/// spliced into the file name.
fn fingerprint(static_dir: &Path, asset: &str, env_var: &str) {
    let source = static_dir.join(asset);
    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(content) = fs::read(&source) else {
        println!("cargo:warning=Could not read {asset}, serving it unhashed");
        println!("cargo:rustc-env={env_var}=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..8).unwrap_or(&digest);
    println!("cargo:rustc-env={env_var}={short}");

    let source_path = Path::new(asset);
    let stem = source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .expect("asset must have a file name");
    let extension = source_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let parent = source_path.parent().unwrap_or_else(|| Path::new(""));

    let derived_dir = static_dir.join(parent).join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived asset directory");
    fs::copy(&source, derived_dir.join(format!("{stem}.{short}.{extension}")))
        .expect("Failed to copy fingerprinted asset");
}
