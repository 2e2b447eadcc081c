use crate::errors::CivicError;
use crate::responses::types::comment::Comment;
use crate::responses::types::post::Post;
use crate::services::{BookmarkService, CommentService, LikeService, PostService};
use crate::transport::Transport;
use crate::views::{routes, Navigator, Phase};

use std::sync::Arc;

/// State behind the post detail page.
///
/// Like, bookmark and comment state only change once the backend has
/// confirmed the action. Any failure sends the user to the login page.
pub struct PostPageController<T: ?Sized, N: ?Sized> {
    transport: Arc<T>,
    navigator: Arc<N>,
    post_id: Option<String>,
    phase: Phase,
    post: Option<Post>,
    is_liked: bool,
    is_bookmarked: bool,
    likes: u64,
    comment_count: u64,
    comments: Vec<Comment>,
    comment_text: String,
}

impl<T: Transport + ?Sized, N: Navigator + ?Sized> PostPageController<T, N> {

    pub fn new(transport: Arc<T>, navigator: Arc<N>) -> Self {
        PostPageController {
            transport,
            navigator,
            post_id: None,
            phase: Phase::Idle,
            post: None,
            is_liked: false,
            is_bookmarked: false,
            likes: 0,
            comment_count: 0,
            comments: Vec::new(),
            comment_text: String::new(),
        }
    }

    /// Loads the post and its comments.
    ///
    /// State from a previous mount is dropped first, so a failed mount leaves
    /// the page empty and later actions are ignored.
    pub async fn mount(&mut self, post_id: &str) {
        self.clear();
        self.phase = Phase::Loading;

        let post = PostService::new(&*self.transport).get(post_id).await;
        let comments = CommentService::new(&*self.transport).list_for_post(post_id).await;

        match (post, comments) {
            (Ok(post), Ok(list)) => {
                self.is_liked = post.is_liked;
                self.is_bookmarked = post.is_bookmarked;
                self.likes = post.likes;
                self.comment_count = list.comments.len() as u64;
                self.comments = list.comments;
                self.post = Some(post);
                self.post_id = Some(post_id.to_owned());
            }
            (Err(e), _) | (_, Err(e)) => self.redirect_to_login(&e),
        }

        self.phase = Phase::Idle;
    }

    pub async fn toggle_like(&mut self) {
        let Some(post_id) = self.post_id.clone() else {
            log::warn!("Ignoring like before the page was mounted");
            return;
        };
        self.phase = Phase::Loading;

        match LikeService::new(&*self.transport).toggle_post_like(&post_id).await {
            Ok(_) => {
                self.likes = if self.is_liked { self.likes.saturating_sub(1) } else { self.likes + 1 };
                self.is_liked = !self.is_liked;
            }
            Err(e) => self.redirect_to_login(&e),
        }

        self.phase = Phase::Idle;
    }

    pub async fn toggle_bookmark(&mut self) {
        let Some(post_id) = self.post_id.clone() else {
            log::warn!("Ignoring bookmark before the page was mounted");
            return;
        };
        self.phase = Phase::Loading;

        match BookmarkService::new(&*self.transport).toggle(&post_id).await {
            Ok(_) => self.is_bookmarked = !self.is_bookmarked,
            Err(e) => self.redirect_to_login(&e),
        }

        self.phase = Phase::Idle;
    }

    pub fn set_comment_text(&mut self, text: impl Into<String>) {
        self.comment_text = text.into();
    }

    pub async fn submit_comment(&mut self) {
        let Some(post_id) = self.post_id.clone() else {
            log::warn!("Ignoring comment before the page was mounted");
            return;
        };

        let res = CommentService::new(&*self.transport)
            .add(&post_id, &self.comment_text)
            .await;

        match res {
            Ok(comment) => {
                self.comment_count += 1;
                self.comments.push(comment);
                self.comment_text.clear();
            }
            Err(e) => self.redirect_to_login(&e),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn is_liked(&self) -> bool {
        self.is_liked
    }

    pub fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_text(&self) -> &str {
        &self.comment_text
    }

    pub fn post_route(&self) -> Option<String> {
        self.post.as_ref().map(|p| routes::post(&p.id))
    }

    pub fn author_profile_route(&self) -> Option<String> {
        self.post.as_ref().map(|p| routes::profile(p.author.username()))
    }

    fn clear(&mut self) {
        self.post_id = None;
        self.post = None;
        self.is_liked = false;
        self.is_bookmarked = false;
        self.likes = 0;
        self.comment_count = 0;
        self.comments.clear();
    }

    fn redirect_to_login(&self, err: &CivicError) {
        log::error!("{}", err.message());
        self.navigator.navigate(routes::LOGIN, true);
    }

}
