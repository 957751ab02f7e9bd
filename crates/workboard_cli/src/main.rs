//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `workboard_core` linkage and
//!   database bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use workboard_core::db::open_db_in_memory;

fn main() {
    println!("workboard_core ping={}", workboard_core::ping());
    println!("workboard_core version={}", workboard_core::core_version());

    match open_db_in_memory() {
        Ok(_) => println!("workboard_core db=ok"),
        Err(err) => println!("workboard_core db=error {err}"),
    }
}
