//! End-to-end flow: init template, fill it in, validate, render the header.

use std::fs;

use kp_core::{render, validate, DeviceConfig, Field, HeaderFormat, CONFIG_FILE_NAME};

fn fill(config: &mut DeviceConfig) {
    config.set(Field::WifiSsid, "garage-net".to_string());
    config.set(Field::WifiPass, "correct horse battery".to_string());
    config.set(
        Field::TwilioAccountSid,
        "ACdeadbeefdeadbeefdeadbeefdeadbeef".to_string(),
    );
    config.set(
        Field::TwilioAuthToken,
        "0123456789abcdef0123456789abcdef".to_string(),
    );
    config.set(Field::TwilioFromNumber, "+15005550006".to_string());
    config.set(Field::DestPhone, "+14155552671".to_string());
    config.set(Field::BackendUrl, "https://reports.example.com/v1".to_string());
}

#[test]
fn template_fails_validation_filled_config_passes() {
    let mut config = DeviceConfig::template();
    assert!(validate(&config).has_errors());

    fill(&mut config);
    assert!(validate(&config).is_clean());
}

#[test]
fn generated_headers_land_on_disk_with_every_constant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join(CONFIG_FILE_NAME);

    let mut config = DeviceConfig::template();
    fill(&mut config);
    config.save_to_file(&config_path).expect("save config");

    let loaded = DeviceConfig::from_file(&config_path).expect("load config");
    assert!(validate(&loaded).is_clean());

    let c_out = dir.path().join("include").join("secrets.h");
    render::write_header(&loaded, HeaderFormat::C, Some(&config_path), &c_out)
        .expect("write C header");
    let rust_out = dir.path().join("src").join("secrets.rs");
    render::write_header(&loaded, HeaderFormat::Rust, Some(&config_path), &rust_out)
        .expect("write Rust module");

    let c_text = fs::read_to_string(&c_out).expect("read C header");
    let rust_text = fs::read_to_string(&rust_out).expect("read Rust module");

    for field in Field::ALL {
        assert!(c_text.contains(field.export_name()), "{field} missing from C");
        assert!(
            rust_text.contains(field.export_name()),
            "{field} missing from Rust"
        );
    }
    assert!(c_text.contains("#pragma once"));
    assert!(rust_text.contains("pub const WIFI_SSID: &str = \"garage-net\";"));

    // The banner names the config the header came from.
    assert!(c_text.contains(CONFIG_FILE_NAME));
}
