/// Minimum spacing between two published messages when `cfg.toml` sets none (10 seconds)
pub const DEFAULT_MESSAGE_INTERVAL_MS: u64 = 1000 * 10;

/// Capacity of the formatted MQTT payload
pub const MESSAGE_BUFFER_SIZE: usize = 256;
