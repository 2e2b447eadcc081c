use crate::requests::{ApiRequest, FormPart, Operation, Upload};
use crate::responses::types::post::Post;
use crate::utils::encode_segment;

pub const BASE_PATH: &str = "/api/v1/post";

#[derive(Clone, Copy, Debug)]
pub struct ListPosts {
    pub page: u32,
    pub limit: u32,
}

impl Operation for ListPosts {
    type Output = Vec<Post>;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(BASE_PATH)
            .query("page", self.page)
            .query("limit", self.limit)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GetPost<'a> {
    pub id: &'a str,
}

impl Operation for GetPost<'_> {
    type Output = Post;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(format!("{BASE_PATH}/{}", encode_segment(self.id)))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ListPostsByUser<'a> {
    pub username: &'a str,
}

impl Operation for ListPostsByUser<'_> {
    type Output = Vec<Post>;

    fn into_request(self) -> ApiRequest {
        ApiRequest::get(format!("{BASE_PATH}/get/u/{}", encode_segment(self.username)))
    }
}

/// A post to be created.
///
/// Sent as `multipart/form-data`: one `content` field, one `tags[i]` field per
/// tag and one repeated `images` file field per attached image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPost {
    pub content: String,
    pub tags: Vec<String>,
    pub images: Vec<Upload>,
}

impl NewPost {

    pub fn new(content: impl Into<String>) -> Self {
        NewPost {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn image(mut self, image: Upload) -> Self {
        self.images.push(image);
        self
    }

    fn into_parts(self) -> Vec<FormPart> {
        let mut parts = Vec::with_capacity(1 + self.tags.len() + self.images.len());
        parts.push(FormPart::text("content", self.content));
        parts.extend(
            self.tags
                .into_iter()
                .enumerate()
                .map(|(i, tag)| FormPart::text(format!("tags[{i}]"), tag))
        );
        parts.extend(self.images.into_iter().map(|img| FormPart::file("images", img)));
        parts
    }
}

impl Operation for NewPost {
    type Output = Post;

    fn into_request(self) -> ApiRequest {
        ApiRequest::post(format!("{BASE_PATH}/")).multipart(self.into_parts())
    }
}
