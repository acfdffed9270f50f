//! Wire types for person requests and responses.

use super::PersonView;
use crate::domain::comment::CommentView;
use crate::domain::community::CommunityModeratorView;
use crate::domain::post::PostView;
use crate::shared::{CommunityId, PersonId};
use serde::{Deserialize, Serialize};

/// `GET user` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPersonDetailsResponse {
    pub person_view: PersonView,
    #[serde(default)]
    pub comments: Vec<CommentView>,
    #[serde(default)]
    pub posts: Vec<PostView>,
    #[serde(default)]
    pub moderates: Vec<CommunityModeratorView>,
}

/// Who to look up in `GET user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonRef {
    Id(PersonId),
    /// `name` or `name@instance`.
    Name(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPerson {
    pub person_id: PersonId,
    pub block: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPersonResponse {
    pub person_view: PersonView,
    pub blocked: bool,
}

/// Site-wide ban (`POST user/ban`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanPerson {
    pub person_id: PersonId,
    pub ban: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanPersonResponse {
    pub person_view: PersonView,
    pub banned: bool,
}

/// Community ban (`POST community/ban_user`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanFromCommunity {
    pub community_id: CommunityId,
    pub person_id: PersonId,
    pub ban: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanFromCommunityResponse {
    pub person_view: PersonView,
    pub banned: bool,
}
