use crate::requests::auth::Credentials;
use crate::services::AuthService;
use crate::transport::Transport;
use crate::views::feedback::Feedback;
use crate::views::{routes, Navigator, Phase, SessionStore};

use std::sync::Arc;

pub struct LoginController<T: ?Sized, S: ?Sized, N: ?Sized> {
    transport: Arc<T>,
    session: Arc<S>,
    navigator: Arc<N>,
    phase: Phase,
    feedback: Option<Feedback>,
}

impl<T, S, N> LoginController<T, S, N>
where
    T: Transport + ?Sized,
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{

    pub fn new(transport: Arc<T>, session: Arc<S>, navigator: Arc<N>) -> Self {
        LoginController {
            transport,
            session,
            navigator,
            phase: Phase::Idle,
            feedback: None,
        }
    }

    /// Sends users that are already logged in to the home page.
    pub fn mount(&self) {
        if self.session.is_logged_in() {
            self.navigator.navigate(routes::HOME, false);
        }
    }

    pub async fn submit(&mut self, credentials: &Credentials) {
        self.phase = Phase::Loading;
        self.feedback = None;

        match AuthService::new(&*self.transport).login(credentials).await {
            Ok(login) => {
                log::info!("Logged in as {}", login.user.username);
                self.session.sign_in(login.user);
                self.navigator.navigate(routes::HOME, false);
            }
            Err(e) => {
                log::error!("Login failed: {}", e.message());
                self.feedback = Some(Feedback::error(e.message()));
            }
        }

        self.phase = Phase::Idle;
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback = None;
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

}
