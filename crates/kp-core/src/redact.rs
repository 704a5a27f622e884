//! Secret masking for logs and display output

use crate::config::Field;

const MASK: &str = "********";

/// The printable form of a field's value. Secrets are masked; the account
/// SID keeps its prefix and last four characters so two accounts can be
/// told apart without exposing the identifier.
pub fn redacted(field: Field, value: &str) -> String {
    match field {
        Field::WifiPass | Field::TwilioAuthToken => MASK.to_string(),
        Field::TwilioAccountSid => {
            if value.len() > 8 && value.is_ascii() {
                format!("{}{}{}", &value[..2], MASK, &value[value.len() - 4..])
            } else {
                MASK.to_string()
            }
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passwords_and_tokens_are_fully_masked() {
        assert_eq!(redacted(Field::WifiPass, "hunter22"), MASK);
        assert_eq!(
            redacted(Field::TwilioAuthToken, "0123456789abcdef0123456789abcdef"),
            MASK
        );
    }

    #[test]
    fn account_sid_keeps_prefix_and_tail() {
        let sid = "ACdeadbeefdeadbeefdeadbeefdeadbeef";
        assert_eq!(redacted(Field::TwilioAccountSid, sid), "AC********beef");
    }

    #[test]
    fn short_sid_is_fully_masked() {
        assert_eq!(redacted(Field::TwilioAccountSid, "AC12"), MASK);
    }

    #[test]
    fn non_secrets_pass_through() {
        assert_eq!(redacted(Field::WifiSsid, "garage-net"), "garage-net");
        assert_eq!(redacted(Field::DestPhone, "+14155552671"), "+14155552671");
    }
}
