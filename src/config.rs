pub struct Config {
    // MQTT password for authentication
    pub mqtt_password: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_server: &'static str,

    // MQTT username for authentication
    pub mqtt_user: &'static str,

    // Password the device requires before accepting an OTA update
    pub ota_password: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Wi-Fi network name the device associates with.
pub const WIFI_SSID: &str = CONFIG.wifi_ssid;
/// Wi-Fi pre-shared key.
pub const WIFI_PASSWORD: &str = CONFIG.wifi_password;

/// MQTT broker hostname or IP address.
pub const MQTT_SERVER: &str = CONFIG.mqtt_server;
/// Username presented to the MQTT broker.
pub const MQTT_USER: &str = CONFIG.mqtt_user;
/// Password presented to the MQTT broker.
pub const MQTT_PASSWORD: &str = CONFIG.mqtt_password;

/// Password gating over-the-air firmware updates.
pub const OTA_PASSWORD: &str = CONFIG.ota_password;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_non_empty() {
        let credentials = [
            WIFI_SSID,
            WIFI_PASSWORD,
            MQTT_SERVER,
            MQTT_USER,
            MQTT_PASSWORD,
            OTA_PASSWORD,
        ];

        for credential in credentials {
            assert!(!credential.is_empty());
        }
    }

    #[test]
    fn named_constants_match_config_record() {
        assert_eq!(WIFI_SSID, CONFIG.wifi_ssid);
        assert_eq!(WIFI_PASSWORD, CONFIG.wifi_password);
        assert_eq!(MQTT_SERVER, CONFIG.mqtt_server);
        assert_eq!(MQTT_USER, CONFIG.mqtt_user);
        assert_eq!(MQTT_PASSWORD, CONFIG.mqtt_password);
        assert_eq!(OTA_PASSWORD, CONFIG.ota_password);
    }
}
