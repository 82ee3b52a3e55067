// Build script for fenrirctl: version and target shown by --version

fn main() {
    let version =
        std::env::var("FENRIR_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=FENRIR_VERSION={}", version);
    println!("cargo:rustc-env=FENRIR_BUILD={} {}", target, profile);
    println!("cargo:rerun-if-env-changed=FENRIR_VERSION");
}
