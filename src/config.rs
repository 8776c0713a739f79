use embassy_time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials {
    // Wi-Fi SSID to connect to
    pub ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorIdentity {
    // Sensor ID (used as MQTT client ID and in payloads)
    pub id: &'static str,

    // Location identifier (used in MQTT payloads)
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokerAddress {
    // MQTT broker hostname or IP address
    pub host: &'static str,

    // MQTT port (usually 1883 or 8883 for TLS), never 0
    pub port: u16,
}

/// GPIO numbers of the four wired peripherals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinAssignment {
    // Analog temperature probe
    pub temp: u8,

    // Digital leak detector input
    pub leak: u8,

    // Leak indicator LED
    pub red_led: u8,

    // Status LED
    pub blue_led: u8,
}

pub struct Config {
    pub wifi: WifiCredentials,

    pub sensor: SensorIdentity,

    pub broker: BrokerAddress,

    // MQTT topic to publish sensor data to
    pub mqtt_topic: &'static str,

    pub pins: PinAssignment,

    // Minimum spacing between messages, never 0
    pub message_interval_ms: u64,
}

impl Config {
    pub fn message_interval(&self) -> Duration {
        Duration::from_millis(self.message_interval_ms)
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
