//! Person domain: user profiles, details, blocking and site bans.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::serde_util::lemmy_date;
use crate::shared::PersonId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account, local or federated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub banned: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
    pub actor_id: String,
    pub bio: Option<String>,
    pub local: bool,
    pub banner: Option<String>,
    pub deleted: bool,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub bot_account: bool,
    #[serde(default, with = "lemmy_date::option")]
    pub ban_expires: Option<DateTime<Utc>>,
}

impl Person {
    /// Name to show: display name if set, else the account name.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// `name@host` for federated users, `name` for local ones.
    pub fn full_name(&self) -> String {
        if self.local {
            return self.name.clone();
        }
        match host_of(&self.actor_id) {
            Some(host) => format!("{}@{}", self.name, host),
            None => self.name.clone(),
        }
    }
}

/// Host part of an ActivityPub actor id (`https://host/u/name`).
pub(crate) fn host_of(actor_id: &str) -> Option<&str> {
    let rest = actor_id.split_once("://")?.1;
    rest.split('/').next().filter(|h| !h.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonAggregates {
    pub person_id: PersonId,
    pub post_count: i64,
    #[serde(default)]
    pub post_score: i64,
    pub comment_count: i64,
    #[serde(default)]
    pub comment_score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonView {
    pub person: Person,
    pub counts: PersonAggregates,
}
