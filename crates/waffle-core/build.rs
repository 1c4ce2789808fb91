// File: crates/waffle-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU pull in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups used by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
