use crate::error::{Error, Result};
use crate::utils::{telegram_auth, token};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TelegramAuthRequest {
    pub init_data: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
}

/// Verify Telegram Mini App initData and issue a bearer token for the
/// `/api` surface.
pub async fn telegram_auth(
    Json(payload): Json<TelegramAuthRequest>,
) -> Result<Json<AuthResponse>> {
    let config = crate::config::get_config();
    let user = telegram_auth::verify_init_data(&payload.init_data, &config.telegram_bot_token)
        .ok_or_else(|| Error::Unauthorized("Invalid Telegram init data".to_string()))?;

    let user_id = user.id.to_string();
    let token = token::issue_jwt(&user_id, &config.jwt_secret)?;

    Ok(Json(AuthResponse { token, user_id }))
}
