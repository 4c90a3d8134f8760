// Desktop builds on Linux link against system webview libraries; fail early with
// install hints instead of a wall of linker errors.

const LINUX_DESKTOP_LIBS: &[(&str, &str, &str)] = &[
    ("libxdo", "libxdo-devel", "libxdo-dev"),
    ("webkit2gtk-4.1", "webkit2gtk4.1-devel", "libwebkit2gtk-4.1-dev"),
];

fn main() {
    println!("cargo:rerun-if-changed=assets/dashboard.json");
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !(is_desktop && is_linux) {
        return;
    }
    let missing: Vec<_> = LINUX_DESKTOP_LIBS
        .iter()
        .filter(|(lib, _, _)| !system_lib_present(lib))
        .collect();
    if missing.is_empty() {
        return;
    }
    eprintln!();
    eprintln!("  error: salon dashboard desktop build is missing system libraries:");
    for (lib, fedora, debian) in &missing {
        eprintln!("    {lib}:  Fedora/RHEL: sudo dnf install {fedora}   Debian/Ubuntu: sudo apt install {debian}");
    }
    eprintln!();
    eprintln!("  Or build for the browser instead: dx serve");
    eprintln!();
    std::process::exit(1);
}

fn system_lib_present(lib: &str) -> bool {
    // libxdo often ships without a .pc file, so fall back to the linker cache
    std::process::Command::new("pkg-config")
        .args(["--exists", lib])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
        || std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains(lib))
            .unwrap_or(false)
}
