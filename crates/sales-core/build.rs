// File: crates/sales-core/build.rs
// Summary: Links the Windows system libraries Skia needs for the PNG exporter.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager calls RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
