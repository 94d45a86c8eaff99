//! Pattern 1: Singleton
//!
//! A process-wide registry with exactly one instance. Construction is
//! deferred until the first `global()` call; every later call returns a
//! reference to the same object.
//!
//! Advantages:
//! - One well-known access point for a shared resource
//! - Nothing is built until someone actually asks for it
//!
//! Trade-offs:
//! - Callers pick up a hidden dependency on global state
//! - Harder to isolate in tests than an explicitly passed value
//!
//! Run with: cargo run --bin p1_singleton

use std::sync::OnceLock;

struct AppRegistry {
    name: String,
    max_connections: u32,
}

impl AppRegistry {
    /// Returns the single shared instance, building it on first access.
    fn global() -> &'static AppRegistry {
        static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| AppRegistry {
            name: "catalog-registry".to_string(),
            max_connections: 8,
        })
    }
}


fn main() {
    println!("=== Singleton Pattern ===");

    // First access builds the registry.
    let registry = AppRegistry::global();
    println!("name: {}", registry.name);
    println!("max_connections: {}", registry.max_connections);

    // Second access returns the very same object.
    let again = AppRegistry::global();
    println!("Same instance: {}", std::ptr::eq(registry, again));
}
