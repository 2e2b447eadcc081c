pub mod comment;
pub mod engagement;
pub mod initiative;
pub mod post;
pub mod user;

use serde::{Deserialize, Deserializer, Serialize};

/// Fields the backend sent that this crate does not model.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Reads `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Avatar {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Account {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The profile that wrote a post or comment.
///
/// A missing or `null` author, or one without an account, decodes to an empty
/// profile whose username is `""`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Author {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account: Account,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Author {
    pub fn username(&self) -> &str {
        &self.account.username
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.account.avatar.as_ref().map(|a| a.url.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Image {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(flatten)]
    pub extra: Extra,
}
