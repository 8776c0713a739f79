use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[allow(dead_code)]
#[path = "src/constants.rs"]
mod constants;

#[path = "src/cfg_rules.rs"]
mod cfg_rules;

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    sensor_id: String,
    location: String,
    mqtt_hostname: String,
    mqtt_port: u16,
    mqtt_topic: String,
    temp_pin: RawPin,
    leak_pin: RawPin,
    red_led_pin: RawPin,
    blue_led_pin: RawPin,
    message_interval_ms: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPin {
    Gpio(u8),
    Label(String),
}

impl RawPin {
    fn resolve(&self, role: &str) -> Result<u8, Box<dyn Error>> {
        match self {
            RawPin::Gpio(gpio) => Ok(*gpio),
            RawPin::Label(label) => cfg_rules::resolve_pin_label(label)
                .ok_or_else(|| format!("{role}: unknown pin label {label:?}").into()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=LEAK_SENSOR_CONFIG");
    let cfg_path = env::var("LEAK_SENSOR_CONFIG").unwrap_or_else(|_| "cfg.toml".into());

    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed={cfg_path}");
    println!("cargo:rerun-if-changed=src/cfg_rules.rs");
    println!("cargo:rerun-if-changed=src/constants.rs");

    // Read and parse
    let toml_str = fs::read_to_string(&cfg_path)
        .map_err(|e| format!("failed to read {cfg_path}: {e}"))?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    cfg_rules::check_broker(raw.mqtt_port, &raw.mqtt_topic)?;
    let interval_ms = cfg_rules::message_interval_ms(raw.message_interval_ms)?;

    let temp = raw.temp_pin.resolve("temp_pin")?;
    let leak = raw.leak_pin.resolve("leak_pin")?;
    let red_led = raw.red_led_pin.resolve("red_led_pin")?;
    let blue_led = raw.blue_led_pin.resolve("blue_led_pin")?;

    cfg_rules::check_distinct_pins(&[
        ("temp_pin", temp),
        ("leak_pin", leak),
        ("red_led_pin", red_led),
        ("blue_led_pin", blue_led),
    ])?;

    // Generate Rust code
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi: WifiCredentials {{
                ssid: {ssid:?},
                password: {psk:?},
            }},
            sensor: SensorIdentity {{
                id: {id:?},
                location: {loc:?},
            }},
            broker: BrokerAddress {{
                host: {mh:?},
                port: {mp},
            }},
            mqtt_topic: {mt:?},
            pins: PinAssignment {{
                temp: {temp},
                leak: {leak},
                red_led: {red_led},
                blue_led: {blue_led},
            }},
            message_interval_ms: {intv},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        id = raw.sensor_id,
        loc = raw.location,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port,
        mt = raw.mqtt_topic,
        intv = interval_ms,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
