use crate::responses::types::{null_as_default, Avatar, Extra};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Result of a successful login.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {

    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_session() -> Result<(), anyhow::Error> {
        let login: LoginSession = serde_json::from_value(json!({
            "user": {"_id": "u1", "username": "jane", "email": "jane@example.com", "role": "USER"},
            "accessToken": "abc",
        }))?;
        assert_eq!(login.user.username, "jane");
        assert_eq!(login.user.extra["role"], "USER");
        assert_eq!(login.access_token.as_deref(), Some("abc"));
        assert_eq!(login.refresh_token, None);
        Ok(())
    }

}
