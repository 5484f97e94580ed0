use contracts::shared::api_error::ApiError;
use contracts::system::auth::{SigninRequest, SigninResponse};

use crate::shared::http::Gateway;

/// Sign in with email and password
pub async fn signin(request: &SigninRequest) -> Result<SigninResponse, ApiError> {
    Gateway::anonymous()
        .post_json("/api/super/signin", request)
        .await
}
