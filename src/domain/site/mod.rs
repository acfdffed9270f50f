//! Site domain: instance metadata and the logged-in account's info.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::community::{Community, CommunityModeratorView};
use crate::domain::person::{Person, PersonView};
use crate::shared::serde_util::lemmy_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub sidebar: Option<String>,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub description: Option<String>,
    pub actor_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAggregates {
    pub users: i64,
    pub posts: i64,
    pub comments: i64,
    pub communities: i64,
    pub users_active_day: i64,
    pub users_active_week: i64,
    pub users_active_month: i64,
    pub users_active_half_year: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteView {
    pub site: Site,
    pub counts: SiteAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalUserView {
    pub person: Person,
    pub counts: crate::domain::person::PersonAggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityFollowerView {
    pub community: Community,
    pub follower: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyUserInfo {
    pub local_user_view: LocalUserView,
    #[serde(default)]
    pub follows: Vec<CommunityFollowerView>,
    #[serde(default)]
    pub moderates: Vec<CommunityModeratorView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSiteResponse {
    pub site_view: SiteView,
    #[serde(default)]
    pub admins: Vec<PersonView>,
    pub version: String,
    /// Present when the request carried a valid token.
    pub my_user: Option<MyUserInfo>,
}

impl GetSiteResponse {
    pub fn is_admin(&self) -> bool {
        self.my_user.as_ref().is_some_and(|me| {
            let id = me.local_user_view.person.id;
            self.admins.iter().any(|a| a.person.id == id)
        })
    }
}
