//! # Load Order Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (sequential vs parallel)
//! └── src/integration/  # Engine + provider + telemetry flows
//!     ├── plugin_order.rs
//!     └── provider_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lo-tests
//!
//! # Benchmarks
//! cargo bench -p lo-tests
//! ```

pub mod integration;
