use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[path = "src/resources/files.rs"]
mod files;

/// Namespaces bundled into the library, with the name of the generated table.
const NAMESPACES: [(&str, &str); 2] = [("abi", "ABI_ARTIFACTS"), ("bin", "BIN_ARTIFACTS")];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let artifacts_dir = manifest_dir.join("artifacts");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/resources/files.rs");
    println!("cargo:rerun-if-changed={}", artifacts_dir.display());

    let mut generated = fs::File::create(out_dir.join("bundled.rs")).expect("Failed to create bundled.rs");
    for (namespace, table) in NAMESPACES {
        let dir = artifacts_dir.join(namespace);
        println!("cargo:rerun-if-changed={}", dir.display());

        let found = files::artifact_files(&dir).expect("Failed to read artifacts directory");
        for name in &found.skipped {
            println!("cargo:warning=Skipping {namespace} artifact with non UTF-8 name: {name:?}");
        }

        writeln!(generated, "pub(crate) static {table}: &[(&str, &str)] = &[").expect("write");
        for (name, path) in &found.files {
            writeln!(generated, "    ({name:?}, include_str!({:?})),", path.display().to_string())
                .expect("write");
        }
        writeln!(generated, "];").expect("write");
    }
}
