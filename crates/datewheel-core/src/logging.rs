//! Logging facilities for datewheel.
//!
//! datewheel uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "datewheel_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "datewheel_core::signal";
    /// Wheel controller target.
    pub const CONTROLLER: &str = "datewheel::controller";
}
