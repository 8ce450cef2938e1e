//! Build-time credentials for the device firmware.
//!
//! Edit `cfg.toml` at the crate root before flashing; the build script bakes
//! the values into the binary as string constants. Placeholder values build
//! with a warning so the template itself always compiles.

#![no_std]

pub mod config;

pub use config::{
    Config, CONFIG, MQTT_PASSWORD, MQTT_SERVER, MQTT_USER, OTA_PASSWORD, WIFI_PASSWORD, WIFI_SSID,
};
