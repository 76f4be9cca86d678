//! Interop binding compiler driver.
//!
//! Loads a descriptor document, compiles it with `interop_codegen` and writes
//! the artifacts to disk.

pub mod error;
pub mod generate;
pub mod input;
pub mod options;

pub use error::DriverError;
pub use generate::{describe_signature, generate, GenerateSummary};
pub use input::{load_config, load_descriptors, parse_descriptors, DescriptorDocument};
pub use options::{EncodeOptions, GenerateOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Set `RUST_LOG=interop_codegen=debug` to see per-struct spans, or
/// `RUST_LOG=interop_codegen=trace` to see every rendered block.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
