use crate::requests::{ApiRequest, Operation};
use crate::responses::types::user::{LoginSession, User};

use serde_json::json;
use std::fmt;

pub const BASE_PATH: &str = "/api/v1/user";

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Login<'a> {
    pub credentials: &'a Credentials,
}

impl Operation for Login<'_> {
    type Output = LoginSession;

    fn into_request(self) -> ApiRequest {
        ApiRequest::post(format!("{BASE_PATH}/login")).json(json!({
            "username": self.credentials.username,
            "password": self.credentials.password,
        }))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CurrentUser;

impl Operation for CurrentUser {
    type Output = User;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(format!("{BASE_PATH}/current-user"))
    }
}
