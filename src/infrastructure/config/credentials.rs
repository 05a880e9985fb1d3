//! Secrets read from the environment.

use std::fmt;

use crate::error::ConfigError;

/// Environment variable holding the review API OAuth token.
pub const API_TOKEN_VAR: &str = "PRAKTIKUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
/// Environment variable overriding `[api].url`.
pub const API_URL_VAR: &str = "PRAKTIKUM_API_URL";

/// Tokens and destination needed to reach both services.
///
/// Never read from the config file. `Debug` masks the tokens.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
    pub bot_token: String,
    pub chat_id: i64,
}

impl Credentials {
    /// Read credentials through `lookup` (normally `std::env::var`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = required(&lookup, API_TOKEN_VAR)?;
        let bot_token = required(&lookup, BOT_TOKEN_VAR)?;
        let raw_chat_id = required(&lookup, CHAT_ID_VAR)?;
        let chat_id = raw_chat_id
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                field: CHAT_ID_VAR,
                reason: format!("expected an integer chat id, got `{raw_chat_id}`"),
            })?;

        Ok(Self {
            api_token,
            bot_token,
            chat_id,
        })
    }
}

fn required<F>(lookup: &F, field: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(field)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingField { field })
}

/// Show only the last four characters of a secret.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "****".into();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &mask_token(&self.api_token))
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_credentials() {
        let creds = Credentials::from_lookup(lookup(&[
            (API_TOKEN_VAR, "api-secret"),
            (BOT_TOKEN_VAR, "123:bot-secret"),
            (CHAT_ID_VAR, "-1001234"),
        ]))
        .unwrap();

        assert_eq!(creds.api_token, "api-secret");
        assert_eq!(creds.bot_token, "123:bot-secret");
        assert_eq!(creds.chat_id, -1_001_234);
    }

    #[test]
    fn missing_token_is_reported_by_name() {
        let err = Credentials::from_lookup(lookup(&[
            (BOT_TOKEN_VAR, "123:bot-secret"),
            (CHAT_ID_VAR, "42"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingField { field: API_TOKEN_VAR }));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let err = Credentials::from_lookup(lookup(&[
            (API_TOKEN_VAR, "api-secret"),
            (BOT_TOKEN_VAR, "   "),
            (CHAT_ID_VAR, "42"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingField { field: BOT_TOKEN_VAR }));
    }

    #[test]
    fn non_numeric_chat_id_is_invalid() {
        let err = Credentials::from_lookup(lookup(&[
            (API_TOKEN_VAR, "api-secret"),
            (BOT_TOKEN_VAR, "123:bot-secret"),
            (CHAT_ID_VAR, "@channel"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { field: CHAT_ID_VAR, .. }));
    }

    #[test]
    fn debug_masks_tokens() {
        let creds = Credentials {
            api_token: "api-secret-value".into(),
            bot_token: "123:bot-secret".into(),
            chat_id: 42,
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("api-secret-value"));
        assert!(rendered.contains("****alue"));
    }

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask_token("abc"), "****");
    }
}
