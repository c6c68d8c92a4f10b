//! Auth endpoints of the remote API.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

async fn post<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", path, response.status()));
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let response = post("/api/auth/login", &LoginRequest { username, password }).await?;
    parse(response).await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let response = post("/api/auth/refresh", &RefreshRequest { refresh_token }).await?;
    parse(response).await
}

/// Revokes the refresh token.
pub async fn logout(refresh_token: String) -> Result<(), String> {
    post("/api/auth/logout", &RefreshRequest { refresh_token }).await?;
    Ok(())
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("/api/auth/me returned HTTP {}", response.status()));
    }
    parse(response).await
}
