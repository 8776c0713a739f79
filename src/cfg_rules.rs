//! Rules applied to `cfg.toml` before the config table is generated.
//!
//! Compiled into `build.rs` through `#[path]` and into the library only for
//! its tests.

use crate::constants::DEFAULT_MESSAGE_INTERVAL_MS;

/// Resolves a NodeMCU silkscreen label (`A0`, `D0`..`D8`) or a `GPIOn` name
/// to the ESP8266 GPIO number.
pub fn resolve_pin_label(label: &str) -> Option<u8> {
    let label = label.trim().to_ascii_uppercase();

    let gpio = match label.as_str() {
        "A0" => 17,
        "D0" => 16,
        "D1" => 5,
        "D2" => 4,
        "D3" => 0,
        "D4" => 2,
        "D5" => 14,
        "D6" => 12,
        "D7" => 13,
        "D8" => 15,
        other => return other.strip_prefix("GPIO").and_then(|n| n.parse().ok()),
    };

    Some(gpio)
}

pub fn check_broker(port: u16, topic: &str) -> Result<(), String> {
    if port == 0 {
        return Err("mqtt_port must be within 1..=65535".into());
    }
    if topic.trim().is_empty() {
        return Err("mqtt_topic must not be empty".into());
    }
    Ok(())
}

/// Interval to bake into the table, the default when `cfg.toml` sets none.
pub fn message_interval_ms(configured: Option<u64>) -> Result<u64, String> {
    match configured {
        Some(0) => Err("message_interval_ms must be greater than zero".into()),
        Some(ms) => Ok(ms),
        None => Ok(DEFAULT_MESSAGE_INTERVAL_MS),
    }
}

pub fn check_distinct_pins(pins: &[(&str, u8)]) -> Result<(), String> {
    for (i, (role, gpio)) in pins.iter().enumerate() {
        if pins[..i].iter().any(|(_, other)| other == gpio) {
            return Err(format!("{role}: GPIO {gpio} is assigned to more than one role"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodemcu_labels() {
        let expected = [
            ("A0", 17),
            ("D0", 16),
            ("D1", 5),
            ("D2", 4),
            ("D3", 0),
            ("D4", 2),
            ("D5", 14),
            ("D6", 12),
            ("D7", 13),
            ("D8", 15),
        ];
        for (label, gpio) in expected {
            assert_eq!(resolve_pin_label(label), Some(gpio), "label {label}");
        }
    }

    #[test]
    fn labels_ignore_case_and_whitespace() {
        assert_eq!(resolve_pin_label(" d2 "), Some(4));
        assert_eq!(resolve_pin_label("gpio5"), Some(5));
        assert_eq!(resolve_pin_label("GPIO12"), Some(12));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(resolve_pin_label("D9"), None);
        assert_eq!(resolve_pin_label("A1"), None);
        assert_eq!(resolve_pin_label("GPIO"), None);
        assert_eq!(resolve_pin_label("GPIO300"), None);
        assert_eq!(resolve_pin_label(""), None);
    }

    #[test]
    fn broker_port_zero_is_rejected() {
        assert_eq!(
            check_broker(0, "LEAK_SENSOR/ESP-01"),
            Err(String::from("mqtt_port must be within 1..=65535"))
        );
        assert!(check_broker(1, "LEAK_SENSOR/ESP-01").is_ok());
        assert!(check_broker(65535, "LEAK_SENSOR/ESP-01").is_ok());
    }

    #[test]
    fn blank_topic_is_rejected() {
        for topic in ["", "   "] {
            assert_eq!(
                check_broker(1883, topic),
                Err(String::from("mqtt_topic must not be empty"))
            );
        }
    }

    #[test]
    fn interval_defaults_and_rejects_zero() {
        assert_eq!(message_interval_ms(None), Ok(10_000));
        assert_eq!(message_interval_ms(Some(2_500)), Ok(2_500));
        assert_eq!(
            message_interval_ms(Some(0)),
            Err(String::from("message_interval_ms must be greater than zero"))
        );
    }

    #[test]
    fn shared_gpio_is_rejected() {
        let pins = [
            ("temp_pin", 17),
            ("leak_pin", 4),
            ("red_led_pin", 16),
            ("blue_led_pin", 4),
        ];
        assert_eq!(
            check_distinct_pins(&pins),
            Err(String::from("blue_led_pin: GPIO 4 is assigned to more than one role"))
        );
    }

    #[test]
    fn distinct_pins_pass() {
        let pins = [
            ("temp_pin", 17),
            ("leak_pin", 4),
            ("red_led_pin", 16),
            ("blue_led_pin", 2),
        ];
        assert!(check_distinct_pins(&pins).is_ok());
    }
}
