use crate::requests::{ApiRequest, Operation};
use crate::responses::types::engagement::{BookmarkStatus, LikeStatus};
use crate::utils::encode_segment;

pub const LIKE_BASE_PATH: &str = "/api/v1/like";
pub const BOOKMARK_BASE_PATH: &str = "/api/v1/bookmark";

/// Flips the caller's like on a post.
#[derive(Clone, Copy, Debug)]
pub struct TogglePostLike<'a> {
    pub post_id: &'a str,
}

impl Operation for TogglePostLike<'_> {
    type Output = LikeStatus;

    fn into_request(self) -> ApiRequest {
        ApiRequest::post(format!("{LIKE_BASE_PATH}/post/{}", encode_segment(self.post_id)))
    }
}

/// Flips the caller's bookmark on a post.
#[derive(Clone, Copy, Debug)]
pub struct ToggleBookmark<'a> {
    pub post_id: &'a str,
}

impl Operation for ToggleBookmark<'_> {
    type Output = BookmarkStatus;

    fn into_request(self) -> ApiRequest {
        ApiRequest::post(format!("{BOOKMARK_BASE_PATH}/{}", encode_segment(self.post_id)))
    }
}
