//! Stamp the compile time into the binaries for the startup banner

fn main() {
    println!("cargo:rerun-if-changed=src");

    let compiled = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("cargo:rustc-env=SPARKY_IMPORT_COMPILED_AT={}", compiled);
}
