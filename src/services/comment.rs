use crate::errors::CivicError;
use crate::requests::comment::{AddComment, ListComments};
use crate::responses::types::comment::{Comment, CommentList};
use crate::services::execute;
use crate::transport::Transport;

pub struct CommentService<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> CommentService<'a, T> {

    pub fn new(transport: &'a T) -> Self {
        CommentService { transport }
    }

    pub async fn list_for_post(&self, post_id: &str) -> Result<CommentList, CivicError> {
        execute(self.transport, ListComments { post_id }).await
    }

    pub async fn add(&self, post_id: &str, content: &str) -> Result<Comment, CivicError> {
        execute(self.transport, AddComment { post_id, content }).await
    }

}
