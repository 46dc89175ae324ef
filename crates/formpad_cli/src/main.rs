//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `formpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use formpad_core::FormSession;

fn main() {
    println!("formpad_core version={}", formpad_core::core_version());

    let session = FormSession::new();
    let mut out = Vec::new();
    match session.export(&mut out) {
        Ok(()) => println!("{}", String::from_utf8_lossy(&out)),
        Err(err) => {
            eprintln!("export failed: {err}");
            std::process::exit(1);
        }
    }
}
