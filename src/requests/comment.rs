use crate::requests::{ApiRequest, Operation};
use crate::responses::types::comment::{Comment, CommentList};
use crate::utils::encode_segment;

use serde_json::json;

pub const BASE_PATH: &str = "/api/v1/comment";

fn post_comments_path(post_id: &str) -> String {
    format!("{BASE_PATH}/post/{}", encode_segment(post_id))
}

#[derive(Clone, Copy, Debug)]
pub struct ListComments<'a> {
    pub post_id: &'a str,
}

impl Operation for ListComments<'_> {
    type Output = CommentList;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(post_comments_path(self.post_id))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AddComment<'a> {
    pub post_id: &'a str,
    pub content: &'a str,
}

impl Operation for AddComment<'_> {
    type Output = Comment;

    fn into_request(self) -> ApiRequest {
        ApiRequest::post(post_comments_path(self.post_id))
            .json(json!({ "content": self.content }))
    }
}
