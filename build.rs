use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_password: String,
    mqtt_server: String,
    mqtt_user: String,
    mqtt_password: String,
    ota_password: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    let fields = [
        ("wifi_ssid", &raw.wifi_ssid),
        ("wifi_password", &raw.wifi_password),
        ("mqtt_server", &raw.mqtt_server),
        ("mqtt_user", &raw.mqtt_user),
        ("mqtt_password", &raw.mqtt_password),
        ("ota_password", &raw.ota_password),
    ];

    for (key, value) in fields {
        if value.is_empty() {
            return Err(format!("cfg.toml: {key} must not be empty").into());
        }
        // Template values still build, but flashing them is almost certainly a mistake
        if value.starts_with("your_") {
            println!("cargo:warning={key} is still set to the placeholder {value:?}, edit cfg.toml");
        }
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_password: {wifi_password:?},
            mqtt_server: {server:?},
            mqtt_user: {user:?},
            mqtt_password: {mqtt_password:?},
            ota_password: {ota_password:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        wifi_password = raw.wifi_password,
        server = raw.mqtt_server,
        user = raw.mqtt_user,
        mqtt_password = raw.mqtt_password,
        ota_password = raw.ota_password,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
