use std::path::Path;

use kp_cli::commands;
use kp_core::{DeviceConfig, Field, HeaderFormat, CONFIG_FILE_NAME};

fn filled() -> DeviceConfig {
    let mut config = DeviceConfig::template();
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
    config
}

#[test]
fn init_then_check_fails_on_placeholders() {
    let dir = tempfile::tempdir().expect("tempdir");
    commands::init(dir.path(), false).expect("init");

    let config_path = dir.path().join(CONFIG_FILE_NAME);
    assert!(config_path.exists());

    let passed = commands::check(Some(&config_path), false).expect("check runs");
    assert!(!passed, "placeholder config must not pass");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    commands::init(dir.path(), false).expect("first init");
    assert!(commands::init(dir.path(), false).is_err());
    commands::init(dir.path(), true).expect("forced init");
}

#[test]
fn generate_aborts_on_invalid_config_and_writes_valid_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    let out_path = dir.path().join("secrets.h");

    DeviceConfig::template()
        .save_to_file(&config_path)
        .expect("save template");
    assert!(
        commands::generate(Some(&config_path), HeaderFormat::C, Some(&out_path)).is_err(),
        "placeholders must abort generation"
    );
    assert!(!out_path.exists());

    filled().save_to_file(&config_path).expect("save filled");

    commands::generate(Some(&config_path), HeaderFormat::C, Some(&out_path))
        .expect("generate");
    let text = std::fs::read_to_string(&out_path).expect("read header");
    assert!(text.contains("#define TWILIO_FROM_NUMBER \"+15005550006\""));
}

#[test]
fn show_renderings_never_contain_secrets() {
    let config = filled();

    let text = commands::show_text(&config, Path::new(CONFIG_FILE_NAME));
    let json = commands::show_json(&config).expect("json rendering");

    for rendered in [&text, &json] {
        assert!(
            !rendered.contains("correct horse battery"),
            "passphrase leaked:\n{rendered}"
        );
        assert!(
            !rendered.contains("0123456789abcdef0123456789abcdef"),
            "auth token leaked:\n{rendered}"
        );
        // Non-secret values stay readable.
        assert!(rendered.contains("garage-net"));
        assert!(rendered.contains("+14155552671"));
    }
    assert!(text.contains("AC********beef"));
    assert!(json.contains("\"WIFI_PASS\": \"********\""));
}
