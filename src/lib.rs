//! # Design Patterns Catalog
//!
//! Eleven classic object-oriented design patterns, each as a small
//! self-contained Rust program. Every unit carries its own description,
//! trade-off notes, a minimal implementation, and a usage section that
//! prints sample output. The units do not depend on each other.
//!
//! ## Creational
//! - Singleton: one lazily built process-wide instance (`OnceLock`)
//! - Factory: tag-driven construction behind a shared trait
//! - Builder: step-wise construction sequenced by a director
//!
//! ## Structural
//! - Decorator: stacked wrappers augmenting cost and description
//! - Adapter: one narrow interface over incompatible players
//! - Proxy: lazy loading with a cached real subject
//! - Facade: one call sequencing three subsystems
//! - Composite: a tree of leaves and containers with one operation
//!
//! ## Behavioral
//! - Observer: ordered notification of subscribed observers
//! - Strategy: interchangeable sort algorithms behind one context
//! - Command: requests as objects triggered by an invoker
//!
//! Run individual units with:
//! ```bash
//! cargo run --bin p1_singleton
//! cargo run --bin p2_factory
//! cargo run --bin p3_observer
//! cargo run --bin p4_strategy
//! cargo run --bin p5_decorator
//! cargo run --bin p6_adapter
//! cargo run --bin p7_command
//! cargo run --bin p8_proxy
//! cargo run --bin p9_facade
//! cargo run --bin p10_composite
//! cargo run --bin p11_builder
//! ```
