use crate::responses::types::{null_as_default, Extra};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_liked: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_bookmarked: bool,
    #[serde(flatten)]
    pub extra: Extra,
}
