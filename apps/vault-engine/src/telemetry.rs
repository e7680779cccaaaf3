//! Tracing Setup
//!
//! Console tracing with env-filter control.
//!
//! # Configuration
//!
//! - `RUST_LOG`: standard env-filter directives (default: `info`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use vault_engine::telemetry::init_telemetry;
//!
//! fn main() {
//!     init_telemetry();
//!     // ... host code
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();

    if result.is_ok() {
        tracing::info!("Tracing initialized");
    }
}
