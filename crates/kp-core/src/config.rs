//! Configuration schema for Keyplate.toml files
//!
//! This module defines the typed shape of the device-secrets configuration:
//! the WiFi credentials, Twilio API credentials and phone numbers, and the
//! backend endpoint an ESP32 notifier device is flashed with. Firmware code
//! binds to these values by exported constant name, so the names carried by
//! [`Field`] are a stability contract and must not change between releases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::redact;

/// The main configuration structure representing a Keyplate.toml file
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceConfig {
    /// WiFi association credentials
    pub wifi: WifiConfig,
    /// Twilio account credentials and phone numbers
    pub twilio: TwilioConfig,
    /// Backend the device reports to
    pub backend: BackendConfig,
}

/// WiFi credentials for station-mode association
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WifiConfig {
    /// Network identifier, at most 32 bytes per IEEE 802.11
    pub ssid: String,
    /// WPA2 passphrase, 8 to 63 printable ASCII bytes (empty for an open network)
    pub password: String,
}

/// Twilio SMS credentials
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TwilioConfig {
    /// Account SID, `AC` followed by 32 hex characters
    pub account_sid: String,
    /// Auth token, 32 hex characters
    pub auth_token: String,
    /// Sender number in E.164 format
    pub from_number: String,
    /// Notification recipient in E.164 format
    pub dest_number: String,
}

/// Remote backend endpoint
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Absolute HTTPS URL the device reports to
    pub url: String,
}

/// The seven configuration values, in the order they are exported.
///
/// Each variant carries the canonical identifier the generated header
/// exposes to firmware code ([`Field::export_name`]) and the environment
/// variable that overrides it ([`Field::env_var`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WifiSsid,
    WifiPass,
    TwilioAccountSid,
    TwilioAuthToken,
    TwilioFromNumber,
    DestPhone,
    BackendUrl,
}

impl Field {
    /// All fields, in export order.
    pub const ALL: [Field; 7] = [
        Field::WifiSsid,
        Field::WifiPass,
        Field::TwilioAccountSid,
        Field::TwilioAuthToken,
        Field::TwilioFromNumber,
        Field::DestPhone,
        Field::BackendUrl,
    ];

    /// The constant name firmware code binds to.
    pub fn export_name(self) -> &'static str {
        match self {
            Field::WifiSsid => "WIFI_SSID",
            Field::WifiPass => "WIFI_PASS",
            Field::TwilioAccountSid => "TWILIO_ACCOUNT_SID",
            Field::TwilioAuthToken => "TWILIO_AUTH_TOKEN",
            Field::TwilioFromNumber => "TWILIO_FROM_NUMBER",
            Field::DestPhone => "DEST_PHONE",
            Field::BackendUrl => "BACKEND_URL",
        }
    }

    /// Environment variable that overrides this field.
    pub fn env_var(self) -> &'static str {
        match self {
            Field::WifiSsid => "KEYPLATE_WIFI_SSID",
            Field::WifiPass => "KEYPLATE_WIFI_PASSWORD",
            Field::TwilioAccountSid => "KEYPLATE_TWILIO_ACCOUNT_SID",
            Field::TwilioAuthToken => "KEYPLATE_TWILIO_AUTH_TOKEN",
            Field::TwilioFromNumber => "KEYPLATE_TWILIO_FROM_NUMBER",
            Field::DestPhone => "KEYPLATE_DEST_PHONE",
            Field::BackendUrl => "KEYPLATE_BACKEND_URL",
        }
    }

    /// Placeholder value written by `kp init`.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::WifiSsid => "YOUR_WIFI_SSID",
            Field::WifiPass => "YOUR_WIFI_PASSWORD",
            Field::TwilioAccountSid => "YOUR_TWILIO_ACCOUNT_SID",
            Field::TwilioAuthToken => "YOUR_TWILIO_AUTH_TOKEN",
            Field::TwilioFromNumber => "YOUR_TWILIO_FROM_NUMBER",
            Field::DestPhone => "YOUR_DEST_PHONE",
            Field::BackendUrl => "YOUR_BACKEND_URL",
        }
    }

}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.export_name())
    }
}

impl DeviceConfig {
    /// Create the all-placeholder configuration that `kp init` writes.
    pub fn template() -> Self {
        Self {
            wifi: WifiConfig {
                ssid: Field::WifiSsid.placeholder().to_string(),
                password: Field::WifiPass.placeholder().to_string(),
            },
            twilio: TwilioConfig {
                account_sid: Field::TwilioAccountSid.placeholder().to_string(),
                auth_token: Field::TwilioAuthToken.placeholder().to_string(),
                from_number: Field::TwilioFromNumber.placeholder().to_string(),
                dest_number: Field::DestPhone.placeholder().to_string(),
            },
            backend: BackendConfig {
                url: Field::BackendUrl.placeholder().to_string(),
            },
        }
    }

    /// The current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::WifiSsid => &self.wifi.ssid,
            Field::WifiPass => &self.wifi.password,
            Field::TwilioAccountSid => &self.twilio.account_sid,
            Field::TwilioAuthToken => &self.twilio.auth_token,
            Field::TwilioFromNumber => &self.twilio.from_number,
            Field::DestPhone => &self.twilio.dest_number,
            Field::BackendUrl => &self.backend.url,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::WifiSsid => self.wifi.ssid = value,
            Field::WifiPass => self.wifi.password = value,
            Field::TwilioAccountSid => self.twilio.account_sid = value,
            Field::TwilioAuthToken => self.twilio.auth_token = value,
            Field::TwilioFromNumber => self.twilio.from_number = value,
            Field::DestPhone => self.twilio.dest_number = value,
            Field::BackendUrl => self.backend.url = value,
        }
    }
}

// Debug goes through redaction so an accidental `{:?}` in logs cannot
// leak the passphrase or auth token.
impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DeviceConfig");
        for field in Field::ALL {
            s.field(field.export_name(), &redact::redacted(field, self.get(field)));
        }
        s.finish()
    }
}
