use crate::errors::CivicError;
use crate::requests::auth::{Credentials, CurrentUser, Login};
use crate::responses::types::user::{LoginSession, User};
use crate::services::execute;
use crate::transport::Transport;

pub struct AuthService<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> AuthService<'a, T> {

    pub fn new(transport: &'a T) -> Self {
        AuthService { transport }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginSession, CivicError> {
        log::debug!("Logging in as {}", credentials.username);
        execute(self.transport, Login { credentials }).await
    }

    pub async fn current_user(&self) -> Result<User, CivicError> {
        execute(self.transport, CurrentUser).await
    }

}
