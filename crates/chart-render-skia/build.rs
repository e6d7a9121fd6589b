// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font/ICU code needs.

fn main() {
    // target, not host: keeps cross builds to Windows linking correctly
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
