//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pressnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("pressnote_core version={}", pressnote_core::core_version());
    println!(
        "pressnote_core default_log_level={}",
        pressnote_core::default_log_level()
    );
}
