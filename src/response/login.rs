use crate::serialize::{map_values_as_strings, string_or_number_as_string};
use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// The captcha ID sent when there is no captcha to answer.
pub(crate) const NO_CAPTCHA_GID: &str = "-1";

fn no_captcha_gid() -> String {
    NO_CAPTCHA_GID.into()
}

/// The public key used to encrypt the password for a login attempt.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RsaKeyResponse {
    /// Whether a key was issued for the username.
    #[serde(default)]
    pub success: bool,
    /// The modulus as a hexadecimal string.
    #[serde(default)]
    pub publickey_mod: String,
    /// The exponent as a hexadecimal string.
    #[serde(default)]
    pub publickey_exp: String,
    /// Token identifying the key. Sent back with the login request.
    #[serde(default, deserialize_with = "string_or_number_as_string")]
    pub timestamp: String,
}

/// The result of submitting credentials to the login endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    #[serde(default)]
    pub success: bool,
    /// Whether a captcha must be solved before logging in.
    #[serde(default)]
    pub captcha_needed: bool,
    /// The ID of the captcha to solve. `"-1"` when there is none.
    #[serde(default = "no_captcha_gid", deserialize_with = "string_or_number_as_string")]
    pub captcha_gid: String,
    /// Whether a Steam Guard code was sent by email.
    #[serde(default)]
    pub emailauth_needed: bool,
    /// The SteamID the Steam Guard code belongs to.
    #[serde(default, deserialize_with = "string_or_number_as_string")]
    pub emailsteamid: String,
    /// Whether the login completed.
    #[serde(default)]
    pub login_complete: bool,
    /// The URL to post the transfer parameters to.
    #[serde(default)]
    pub transfer_url: Option<String>,
    /// Parameters which install the session cookies when posted to the transfer URL.
    #[serde(default, deserialize_with = "map_values_as_strings")]
    pub transfer_parameters: HashMap<String, String>,
    /// A message describing why the login did not succeed.
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// The captcha ID if a captcha was issued.
    pub fn captcha_gid(&self) -> Option<&str> {
        match self.captcha_gid.as_str() {
            NO_CAPTCHA_GID | "" => None,
            gid => Some(gid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_failed_rsa_key_response() {
        let response: RsaKeyResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();

        assert!(!response.success);
        assert!(response.publickey_mod.is_empty());
    }

    #[test]
    fn deserializes_captcha_response() {
        let body = r#"{"success":false,"message":"","captcha_needed":true,"captcha_gid":"1531235683642521741"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert!(response.captcha_needed);
        assert_eq!(response.captcha_gid(), Some("1531235683642521741"));
        assert!(response.transfer_parameters.is_empty());
    }

    #[test]
    fn deserializes_numeric_captcha_gid() {
        let body = r#"{"success":false,"captcha_needed":false,"captcha_gid":-1,"emailauth_needed":true,"emailsteamid":"76561198000000000"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.captcha_gid, "-1");
        assert_eq!(response.captcha_gid(), None);
        assert_eq!(response.emailsteamid, "76561198000000000");
    }

    #[test]
    fn deserializes_success_response() {
        let body = r#"{
            "success": true,
            "requires_twofactor": false,
            "login_complete": true,
            "transfer_url": "https://store.steampowered.com/login/transfer",
            "transfer_parameters": {
                "steamid": "76561198000000000",
                "token_secure": "secure",
                "auth": "auth",
                "remember_login": false
            }
        }"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert!(response.success);
        assert_eq!(response.transfer_url.as_deref(), Some("https://store.steampowered.com/login/transfer"));
        assert_eq!(response.transfer_parameters.len(), 4);
        assert_eq!(response.transfer_parameters["remember_login"], "false");
    }
}
