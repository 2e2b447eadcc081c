//! Page controllers.
//!
//! A controller owns the interaction state of one page and exposes one async
//! method per user event. Collaborators are injected at construction.

pub mod feedback;
pub mod login_page;
pub mod post_page;
pub mod support_page;

use crate::responses::types::user::User;
use crate::utils::encode_segment;

use std::sync::RwLock;
use strum_macros::Display;

pub mod routes {
    use super::encode_segment;

    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";

    pub fn post(id: &str) -> String {
        format!("/post/{}", encode_segment(id))
    }

    pub fn profile(username: &str) -> String {
        format!("/u?profile={}", encode_segment(username))
    }

    pub fn support(initiative_id: &str) -> String {
        format!("/support/{}", encode_segment(initiative_id))
    }
}

pub trait Navigator: Send + Sync {
    /// Moves to `path`. With `replace` the current history entry is overwritten.
    fn navigate(&self, path: &str, replace: bool);
}

pub trait SessionStore: Send + Sync {
    fn is_logged_in(&self) -> bool;
    fn current_user(&self) -> Option<User>;
    fn sign_in(&self, user: User);
    fn sign_out(&self);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: RwLock<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        MemorySessionStore { user: RwLock::new(Some(user)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn is_logged_in(&self) -> bool {
        self.user.read().map(|u| u.is_some()).unwrap_or(false)
    }

    fn current_user(&self) -> Option<User> {
        self.user.read().ok().and_then(|u| u.clone())
    }

    fn sign_in(&self, user: User) {
        match self.user.write() {
            Ok(mut current) => *current = Some(user),
            Err(poisoned) => *poisoned.into_inner() = Some(user),
        }
    }

    fn sign_out(&self) {
        match self.user.write() {
            Ok(mut current) => *current = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}
