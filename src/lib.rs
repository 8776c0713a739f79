//! Configuration table for the leak sensor firmware.
//!
//! Wi-Fi credentials, broker address, publish topic and pin wiring are read
//! from `cfg.toml` at build time into [`config::CONFIG`]. The firmware main
//! loop owns a [`settings::Settings`] built over it and uses the message
//! timer to space publishes by the configured interval:
//!
//! ```ignore
//! let mut settings = Settings::new(&CONFIG);
//! loop {
//!     let now = Instant::now();
//!     if settings.message_due(now) {
//!         let payload = format_message(&settings.sensor(), &reading, &network)?;
//!         mqtt.send_message(settings.topic(), payload.as_bytes()).await?;
//!         settings.record_publish(now);
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod cfg_rules;
pub mod config;
pub mod constants;
pub mod message;
pub mod settings;
pub mod timer;

pub use config::{
    BrokerAddress, Config, PinAssignment, SensorIdentity, WifiCredentials, CONFIG,
};
pub use settings::Settings;
pub use timer::MessageTimer;
