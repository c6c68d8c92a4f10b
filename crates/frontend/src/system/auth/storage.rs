use crate::shared::browser::storage::local_storage;

const ACCESS_TOKEN_KEY: &str = "fri_access_token";
const REFRESH_TOKEN_KEY: &str = "fri_refresh_token";

fn save(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn save_tokens(access_token: &str, refresh_token: &str) {
    save(ACCESS_TOKEN_KEY, access_token);
    save(REFRESH_TOKEN_KEY, refresh_token);
}

pub fn save_access_token(token: &str) {
    save(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    load(ACCESS_TOKEN_KEY)
}

pub fn get_refresh_token() -> Option<String> {
    load(REFRESH_TOKEN_KEY)
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
