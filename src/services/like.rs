use crate::errors::CivicError;
use crate::requests::engagement::TogglePostLike;
use crate::responses::types::engagement::LikeStatus;
use crate::services::execute;
use crate::transport::Transport;

pub struct LikeService<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> LikeService<'a, T> {

    pub fn new(transport: &'a T) -> Self {
        LikeService { transport }
    }

    pub async fn toggle_post_like(&self, post_id: &str) -> Result<LikeStatus, CivicError> {
        execute(self.transport, TogglePostLike { post_id }).await
    }

}
