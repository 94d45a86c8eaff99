//! Pattern 8: Proxy
//!
//! The proxy stands in for an image that is expensive to load. It answers
//! the same `display` capability as the real image but defers the load
//! until the first call, then keeps the loaded instance so later calls
//! reuse it.
//!
//! Advantages:
//! - Expensive work waits until it is actually needed
//! - Callers use the proxy exactly like the real object
//!
//! Trade-offs:
//! - The first call pays a hidden latency spike
//! - Another type to maintain alongside the real one
//!
//! Run with: cargo run --bin p8_proxy

use std::cell::OnceCell;

trait Image {
    fn display(&self);
}

struct RealImage {
    filename: String,
}

impl RealImage {
    // Stands in for reading and decoding a file.
    fn load(filename: &str) -> Self {
        println!("Loading image from disk: {}", filename);
        RealImage {
            filename: filename.to_string(),
        }
    }
}

impl Image for RealImage {
    fn display(&self) {
        println!("Displaying: {}", self.filename);
    }
}

struct ImageProxy {
    filename: String,
    real: OnceCell<RealImage>,
}

impl ImageProxy {
    fn new(filename: impl Into<String>) -> Self {
        ImageProxy {
            filename: filename.into(),
            real: OnceCell::new(),
        }
    }
}

impl Image for ImageProxy {
    fn display(&self) {
        // First call loads, every later call hits the cached instance.
        let real = self.real.get_or_init(|| RealImage::load(&self.filename));
        real.display();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_does_not_load() {
        let proxy = ImageProxy::new("photo.png");
        assert!(proxy.real.get().is_none());
    }

    #[test]
    fn first_display_loads_and_caches() {
        let proxy = ImageProxy::new("photo.png");
        proxy.display();

        let loaded = proxy.real.get().expect("load happened on first display");
        assert_eq!(loaded.filename, "photo.png");
    }

    #[test]
    fn later_displays_reuse_the_loaded_instance() {
        let proxy = ImageProxy::new("photo.png");
        proxy.display();
        let first = proxy.real.get().unwrap() as *const RealImage;

        proxy.display();
        let second = proxy.real.get().unwrap() as *const RealImage;

        assert_eq!(first, second);
    }
}

fn main() {
    println!("=== Proxy Pattern ===");

    let proxy = ImageProxy::new("holiday.png");
    println!("Proxy created, nothing loaded yet");

    println!("\nFirst display:");
    proxy.display();

    println!("\nSecond display (no load this time):");
    proxy.display();
}
