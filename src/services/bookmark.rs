use crate::errors::CivicError;
use crate::requests::engagement::ToggleBookmark;
use crate::responses::types::engagement::BookmarkStatus;
use crate::services::execute;
use crate::transport::Transport;

pub struct BookmarkService<'a, T: ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> BookmarkService<'a, T> {

    pub fn new(transport: &'a T) -> Self {
        BookmarkService { transport }
    }

    pub async fn toggle(&self, post_id: &str) -> Result<BookmarkStatus, CivicError> {
        execute(self.transport, ToggleBookmark { post_id }).await
    }

}
