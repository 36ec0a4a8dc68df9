//! Link Node Roles
//!
//! The sending and receiving roles of the telemetry link, plus the loop
//! support they share: send pacing, button debouncing, runtime settings
//! and the startup banner.

pub mod banner;
pub mod button;
pub mod config;
pub mod error;
pub mod pacer;
pub mod receiver;
pub mod telemetry;

pub use banner::BuildInfo;
pub use button::{ButtonEvent, DebouncedButton};
pub use config::LinkNodeConfig;
pub use error::NodeError;
pub use pacer::SendPacer;
pub use receiver::LinkConsumer;
pub use telemetry::{SlotSink, TelemetrySampler};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
