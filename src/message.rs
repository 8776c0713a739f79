use core::fmt::Write;
use core::net::Ipv4Addr;

use heapless::String;

use crate::config::SensorIdentity;
use crate::constants::MESSAGE_BUFFER_SIZE;

#[derive(Debug)]
pub enum Error {
    Format,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::Format
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeakStatus {
    Dry,
    Leaking,
}

impl LeakStatus {
    pub fn is_leaking(self) -> bool {
        matches!(self, LeakStatus::Leaking)
    }
}

impl From<bool> for LeakStatus {
    fn from(leaking: bool) -> Self {
        if leaking {
            LeakStatus::Leaking
        } else {
            LeakStatus::Dry
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub leak: LeakStatus,
    /// Degrees Fahrenheit
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct NetworkInfo {
    pub ip: Ipv4Addr,
    pub mac: [u8; 6],
}

/// Builds the JSON object published on every interval:
/// `{"sensor_id", "location", "leak_status", "temp", "ip_addr", "mac"}`.
pub fn format_message(
    sensor: &SensorIdentity,
    reading: &Reading,
    network: &NetworkInfo,
) -> Result<String<MESSAGE_BUFFER_SIZE>, Error> {
    let mut payload: String<MESSAGE_BUFFER_SIZE> = String::new();

    write!(payload, "{{\"sensor_id\":")?;
    write_json_str(&mut payload, sensor.id)?;
    write!(payload, ",\"location\":")?;
    write_json_str(&mut payload, sensor.location)?;
    write!(payload, ",\"leak_status\":{}", reading.leak.is_leaking())?;

    // JSON has no representation for NaN or infinity
    if reading.temperature.is_finite() {
        write!(payload, ",\"temp\":{:.2}", reading.temperature)?;
    } else {
        write!(payload, ",\"temp\":null")?;
    }

    write!(payload, ",\"ip_addr\":\"{}\"", network.ip)?;

    let m = network.mac;
    write!(
        payload,
        ",\"mac\":\"{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}\"}}",
        m[0], m[1], m[2], m[3], m[4], m[5]
    )?;

    log::debug!("Formatted MQTT message: {}", payload);
    Ok(payload)
}

fn write_json_str<W: Write>(out: &mut W, s: &str) -> core::fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
