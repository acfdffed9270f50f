//! Post domain: posts, feeds, votes and saves.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::domain::community::{Community, SubscribedType};
use crate::domain::person::Person;
use crate::shared::serde_util::lemmy_date;
use crate::shared::{CommunityId, LanguageId, PersonId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "http")]
pub use state::PostFeed;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Title.
    pub name: String,
    pub url: Option<String>,
    pub body: Option<String>,
    pub creator_id: PersonId,
    pub community_id: CommunityId,
    pub removed: bool,
    pub locked: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub nsfw: bool,
    pub embed_title: Option<String>,
    pub embed_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub ap_id: String,
    pub local: bool,
    #[serde(default)]
    pub embed_video_url: Option<String>,
    #[serde(default)]
    pub language_id: Option<LanguageId>,
    #[serde(default)]
    pub featured_community: bool,
    #[serde(default)]
    pub featured_local: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAggregates {
    pub post_id: PostId,
    pub comments: i64,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub newest_comment_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub post: Post,
    pub creator: Person,
    pub community: Community,
    #[serde(default)]
    pub creator_banned_from_community: bool,
    pub counts: PostAggregates,
    #[serde(default)]
    pub subscribed: SubscribedType,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub creator_blocked: bool,
    /// The current account's vote; `None` when logged out or never voted.
    pub my_vote: Option<i8>,
    #[serde(default)]
    pub unread_comments: i64,
}

impl PostView {
    pub fn id(&self) -> PostId {
        self.post.id
    }
}

/// Where a post is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostFeatureType {
    Local,
    Community,
}
