use crate::errors::CivicError;
use crate::requests::post::{GetPost, ListPosts, ListPostsByUser, NewPost};
use crate::responses::types::post::Post;
use crate::services::execute;
use crate::transport::Transport;

pub struct PostService<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> PostService<'a, T> {

    pub fn new(transport: &'a T) -> Self {
        PostService { transport }
    }

    /// Fetches one page of the feed.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<Post>, CivicError> {
        execute(self.transport, ListPosts { page, limit }).await
    }

    pub async fn get(&self, id: &str) -> Result<Post, CivicError> {
        execute(self.transport, GetPost { id }).await
    }

    pub async fn list_by_user(&self, username: &str) -> Result<Vec<Post>, CivicError> {
        execute(self.transport, ListPostsByUser { username }).await
    }

    pub async fn create(&self, post: NewPost) -> Result<Post, CivicError> {
        log::debug!("Creating post with {} tags and {} images", post.tags.len(), post.images.len());
        execute(self.transport, post).await
    }

}
