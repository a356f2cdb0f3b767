use contracts::system::auth::UserInfo;

use crate::shared::api_client::{ApiError, RemoteStore};

pub const CURRENT_USER_PATH: &str = "/api/system/auth/me";

/// Get current user info
pub async fn get_current_user<S: RemoteStore>(store: &S) -> Result<UserInfo, ApiError> {
    store.get_json::<UserInfo>(CURRENT_USER_PATH).await
}
