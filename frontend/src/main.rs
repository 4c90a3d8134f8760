//! Salon dashboard - Dioxus app.
//! Browser: dx serve (or cargo run, which hands off to dx). Desktop: cargo run --features desktop.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    salon_dashboard_frontend::launch_app();
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // Force wasm build without reference-types so wasm-bindgen doesn't fail with
    // "failed to find intrinsics to enable clone_ref" (Rust 1.82+ default).
    // dx may not forward env to its cargo child, so set RUSTFLAGS in the shell it runs in.
    let rustflags = match std::env::var("RUSTFLAGS") {
        Ok(flags) if !flags.is_empty() => format!("{flags} -C target-feature=-reference-types"),
        _ => "-C target-feature=-reference-types".to_string(),
    };
    let script = format!("export RUSTFLAGS='{}'; exec dx serve", rustflags.replace('\'', "'\"'\"'"));
    match std::process::Command::new("sh").args(["-c", &script]).status() {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {e}");
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
