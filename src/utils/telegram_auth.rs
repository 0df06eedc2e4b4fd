use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone)]
pub struct TelegramUser {
    pub id: i64,
    pub username: Option<String>,
}

/// Verify a Telegram Mini App `initData` string against the bot token and
/// return the embedded user on success. Telegram signs the DECODED key/value
/// pairs: every pair except `hash`, sorted by key, joined with newlines,
/// HMAC'd with a key derived from HMAC("WebAppData", bot token).
pub fn verify_init_data(init_data: &str, bot_token: &str) -> Option<TelegramUser> {
    let mut pairs: Vec<(String, String)> = url::form_urlencoded::parse(init_data.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let hash_index = pairs.iter().position(|(key, _)| key == "hash")?;
    let (_, expected_hash) = pairs.remove(hash_index);

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    let data_check_string = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("\n");

    let mut secret_mac = HmacSha256::new_from_slice(b"WebAppData").ok()?;
    secret_mac.update(bot_token.as_bytes());
    let secret_key = secret_mac.finalize().into_bytes();

    let mut mac = HmacSha256::new_from_slice(&secret_key).ok()?;
    mac.update(data_check_string.as_bytes());
    let calculated_hash = hex::encode(mac.finalize().into_bytes());

    if !calculated_hash.eq_ignore_ascii_case(&expected_hash) {
        return None;
    }

    let user_json = pairs
        .iter()
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value)?;
    let user: serde_json::Value = serde_json::from_str(user_json).ok()?;
    Some(TelegramUser {
        id: user.get("id")?.as_i64()?,
        username: user
            .get("username")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
    })
}
