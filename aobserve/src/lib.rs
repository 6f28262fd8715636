//! Production-friendly session observers for exchange and ingestion phases.
//!
//! ```rust
//! use aobserve::{MetricsSessionObserver, SafeSessionObserver, TracingSessionObserver};
//!
//! let _tracing = SafeSessionObserver::new(TracingSessionObserver);
//! let _metrics = SafeSessionObserver::new(MetricsSessionObserver);
//! ```

mod metrics_observer;
mod safe_observer;
mod tracing_observer;

pub use metrics_observer::MetricsSessionObserver;
pub use safe_observer::SafeSessionObserver;
pub use tracing_observer::TracingSessionObserver;

pub mod prelude {
    pub use crate::{MetricsSessionObserver, SafeSessionObserver, TracingSessionObserver};
}
