use crate::shared::api_error::ApiError;
use crate::shared::form::FormModel;
use crate::shared::validation::{FieldSchema, ValidationErrors, ValidationRules, Validator};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/super/signin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigninResponse {
    pub authorisation: Authorisation,
    pub user: SigninUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authorisation {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigninUser {
    #[serde(default)]
    pub name: String,
}

/// Signed-in user. Lives only as long as the page; logout drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_name: String,
}

impl From<SigninResponse> for Session {
    fn from(response: SigninResponse) -> Self {
        Self {
            token: response.authorisation.token,
            user_name: response.user.name,
        }
    }
}

/// Message shown when sign-in fails
pub fn signin_error_message(error: &ApiError) -> String {
    error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| "Login failed".to_string())
}

const EMAIL: FieldSchema = FieldSchema::new("email", "Email", ValidationRules::required());
const PASSWORD: FieldSchema = FieldSchema::new("password", "Password", ValidationRules::required());

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormModel for LoginForm {
    type Payload = SigninRequest;

    fn validate(&self) -> Result<SigninRequest, ValidationErrors> {
        let mut v = Validator::new();
        let email = v.text(&EMAIL, &self.email);
        if !email.is_empty() && !email.contains('@') {
            v.reject(EMAIL.field, "Email must be a valid address");
        }
        // passwords are sent as typed
        v.text(&PASSWORD, &self.password);
        v.finish(SigninRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_from_response() {
        let response: SigninResponse = serde_json::from_value(json!({
            "status": "success",
            "user": {"id": 1, "name": "Ada", "email": "ada@example.com"},
            "authorisation": {"token": "abc.def", "type": "bearer"}
        }))
        .unwrap();
        let session = Session::from(response);
        assert_eq!(session.token, "abc.def");
        assert_eq!(session.user_name, "Ada");
    }

    #[test]
    fn failed_signin_prefers_server_message() {
        let err = ApiError::from_status(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(signin_error_message(&err), "Invalid credentials");
        let err = ApiError::from_status(401, "");
        assert_eq!(signin_error_message(&err), "Login failed");
    }

    #[test]
    fn login_form_checks_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let form = LoginForm {
            email: " ada@example.com ".into(),
            password: " secret ".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, " secret ");
    }
}
