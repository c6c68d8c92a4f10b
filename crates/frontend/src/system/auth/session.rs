//! Session flows around the auth endpoints: restore at startup, login, logout.

use contracts::system::auth::UserInfo;

use super::{api, storage};

/// Restores the session from stored tokens. An expired access token is
/// refreshed once; on any failure the tokens are cleared.
pub async fn restore_session() -> Option<UserInfo> {
    let access_token = storage::get_access_token()?;

    match api::get_current_user(&access_token).await {
        Ok(user) => return Some(user),
        Err(e) => log::info!("stored token rejected: {}", e),
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };

    let refreshed = match api::refresh_token(refresh_token).await {
        Ok(response) => response,
        Err(e) => {
            log::info!("token refresh failed: {}", e);
            storage::clear_tokens();
            return None;
        }
    };
    storage::save_access_token(&refreshed.access_token);

    match api::get_current_user(&refreshed.access_token).await {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("session restore failed after refresh: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

pub async fn login(username: String, password: String) -> Result<UserInfo, String> {
    let response = api::login(username, password).await?;
    storage::save_tokens(&response.access_token, &response.refresh_token);
    Ok(response.user)
}

pub async fn logout() {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
}
