//! Wire types for post requests and responses.

use super::{PostFeatureType, PostView};
use crate::domain::community::{CommunityModeratorView, CommunityView};
use crate::shared::{CommunityId, LanguageId, PostId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostsResponse {
    pub posts: Vec<PostView>,
}

/// `GET post` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostResponse {
    pub post_view: PostView,
    pub community_view: CommunityView,
    #[serde(default)]
    pub moderators: Vec<CommunityModeratorView>,
    #[serde(default)]
    pub cross_posts: Vec<PostView>,
}

/// Response of every post mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post_view: PostView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub name: String,
    pub community_id: CommunityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<LanguageId>,
}

impl CreatePost {
    pub fn new(community_id: CommunityId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            community_id,
            url: None,
            body: None,
            nsfw: None,
            language_id: None,
        }
    }
}

/// Only the fields that are `Some` are changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPost {
    pub post_id: PostId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<LanguageId>,
}

impl EditPost {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            name: None,
            url: None,
            body: None,
            nsfw: None,
            language_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePost {
    pub post_id: PostId,
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePost {
    pub post_id: PostId,
    pub removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockPost {
    pub post_id: PostId,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturePost {
    pub post_id: PostId,
    pub featured: bool,
    pub feature_type: PostFeatureType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostLike {
    pub post_id: PostId,
    /// -1, 0 or 1.
    pub score: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePost {
    pub post_id: PostId,
    pub save: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkPostAsRead {
    pub post_id: PostId,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostReport {
    pub post_id: PostId,
    pub reason: String,
}
