//! The configuration table owned by the firmware main loop.
//!
//! Everything except the message timer is read straight out of the
//! compile-time [`Config`]. The loop holds the table by value and hands out
//! `&Settings` to readers; only the loop itself writes the timer, once per
//! published message.

use embassy_time::{Duration, Instant};
use log::debug;

use crate::config::{BrokerAddress, Config, PinAssignment, SensorIdentity, WifiCredentials};
use crate::timer::MessageTimer;

pub struct Settings {
    config: &'static Config,
    message_timer: MessageTimer,
}

impl Settings {
    pub const fn new(config: &'static Config) -> Self {
        Self {
            config,
            message_timer: MessageTimer::new(),
        }
    }

    pub fn wifi(&self) -> WifiCredentials {
        self.config.wifi
    }

    pub fn sensor(&self) -> SensorIdentity {
        self.config.sensor
    }

    pub fn broker(&self) -> BrokerAddress {
        self.config.broker
    }

    pub fn topic(&self) -> &'static str {
        self.config.mqtt_topic
    }

    pub fn pins(&self) -> PinAssignment {
        self.config.pins
    }

    pub fn message_interval(&self) -> Duration {
        self.config.message_interval()
    }

    pub fn message_timer(&self) -> Instant {
        self.message_timer.get()
    }

    pub fn set_message_timer(&mut self, value: Instant) {
        self.message_timer.set(value);
    }

    /// Whether at least one message interval has passed since the last publish.
    pub fn message_due(&self, now: Instant) -> bool {
        self.message_timer.is_elapsed(now, self.message_interval())
    }

    pub fn record_publish(&mut self, now: Instant) {
        self.message_timer.mark(now);
        debug!(
            "Message published to {} at {} ms",
            self.config.mqtt_topic,
            self.message_timer.get().as_millis()
        );
    }
}
