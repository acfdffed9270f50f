//! Community domain: communities, subscriptions, moderators.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::person::{host_of, Person};
use crate::shared::serde_util::lemmy_date;
use crate::shared::CommunityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub removed: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub nsfw: bool,
    pub actor_id: String,
    pub local: bool,
    pub icon: Option<String>,
    pub banner: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub posting_restricted_to_mods: bool,
}

impl Community {
    /// `name@host` for federated communities, the form `post/list` expects in
    /// `community_name`.
    pub fn qualified_name(&self) -> String {
        if self.local {
            return self.name.clone();
        }
        match host_of(&self.actor_id) {
            Some(host) => format!("{}@{}", self.name, host),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityAggregates {
    pub community_id: CommunityId,
    pub subscribers: i64,
    pub posts: i64,
    pub comments: i64,
    #[serde(default)]
    pub users_active_day: i64,
    #[serde(default)]
    pub users_active_week: i64,
    #[serde(default)]
    pub users_active_month: i64,
}

/// Subscription state of the current account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubscribedType {
    Subscribed,
    #[default]
    NotSubscribed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityView {
    pub community: Community,
    pub subscribed: SubscribedType,
    #[serde(default)]
    pub blocked: bool,
    pub counts: CommunityAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityModeratorView {
    pub community: Community,
    pub moderator: Person,
}
