//! Moderation log records and a merged timeline over them.

use crate::domain::comment::Comment;
use crate::domain::community::Community;
use crate::domain::person::Person;
use crate::domain::post::Post;
use crate::shared::serde_util::lemmy_date;
use crate::shared::{CommentId, CommunityId, PersonId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModRemovePost {
    pub id: i64,
    pub mod_person_id: PersonId,
    pub post_id: PostId,
    pub reason: Option<String>,
    pub removed: bool,
    #[serde(with = "lemmy_date")]
    pub when_: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModRemovePostView {
    pub mod_remove_post: ModRemovePost,
    /// Hidden from non-admins on some instances.
    pub moderator: Option<Person>,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModLockPost {
    pub id: i64,
    pub mod_person_id: PersonId,
    pub post_id: PostId,
    pub locked: bool,
    #[serde(with = "lemmy_date")]
    pub when_: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModLockPostView {
    pub mod_lock_post: ModLockPost,
    pub moderator: Option<Person>,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModFeaturePost {
    pub id: i64,
    pub mod_person_id: PersonId,
    pub post_id: PostId,
    pub featured: bool,
    #[serde(with = "lemmy_date")]
    pub when_: DateTime<Utc>,
    #[serde(default)]
    pub is_featured_community: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModFeaturePostView {
    pub mod_feature_post: ModFeaturePost,
    pub moderator: Option<Person>,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModRemoveComment {
    pub id: i64,
    pub mod_person_id: PersonId,
    pub comment_id: CommentId,
    pub reason: Option<String>,
    pub removed: bool,
    #[serde(with = "lemmy_date")]
    pub when_: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModRemoveCommentView {
    pub mod_remove_comment: ModRemoveComment,
    pub moderator: Option<Person>,
    pub comment: Comment,
    pub commenter: Person,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModBanFromCommunity {
    pub id: i64,
    pub mod_person_id: PersonId,
    pub other_person_id: PersonId,
    pub community_id: CommunityId,
    pub reason: Option<String>,
    pub banned: bool,
    #[serde(default, with = "lemmy_date::option")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(with = "lemmy_date")]
    pub when_: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModBanFromCommunityView {
    pub mod_ban_from_community: ModBanFromCommunity,
    pub moderator: Option<Person>,
    pub community: Community,
    pub banned_person: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModBan {
    pub id: i64,
    pub mod_person_id: PersonId,
    pub other_person_id: PersonId,
    pub reason: Option<String>,
    pub banned: bool,
    #[serde(default, with = "lemmy_date::option")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(with = "lemmy_date")]
    pub when_: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModBanView {
    pub mod_ban: ModBan,
    pub moderator: Option<Person>,
    pub banned_person: Person,
}

/// `GET modlog` response. Categories this client does not model are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetModlogResponse {
    #[serde(default)]
    pub removed_posts: Vec<ModRemovePostView>,
    #[serde(default)]
    pub locked_posts: Vec<ModLockPostView>,
    #[serde(default)]
    pub featured_posts: Vec<ModFeaturePostView>,
    #[serde(default)]
    pub removed_comments: Vec<ModRemoveCommentView>,
    #[serde(default)]
    pub banned_from_community: Vec<ModBanFromCommunityView>,
    #[serde(default)]
    pub banned: Vec<ModBanView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModlogKind {
    RemovePost,
    LockPost,
    FeaturePost,
    RemoveComment,
    BanFromCommunity,
    Ban,
}

/// One row of the merged modlog timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ModlogEntry {
    pub kind: ModlogKind,
    pub when: DateTime<Utc>,
    pub moderator: Option<Person>,
    /// `true` for remove/lock/feature/ban, `false` for the reversal.
    pub applied: bool,
    pub reason: Option<String>,
    pub summary: String,
}

impl GetModlogResponse {
    /// Every entry, newest first.
    pub fn entries(&self) -> Vec<ModlogEntry> {
        let mut out = Vec::new();
        for v in &self.removed_posts {
            out.push(ModlogEntry {
                kind: ModlogKind::RemovePost,
                when: v.mod_remove_post.when_,
                moderator: v.moderator.clone(),
                applied: v.mod_remove_post.removed,
                reason: v.mod_remove_post.reason.clone(),
                summary: v.post.name.clone(),
            });
        }
        for v in &self.locked_posts {
            out.push(ModlogEntry {
                kind: ModlogKind::LockPost,
                when: v.mod_lock_post.when_,
                moderator: v.moderator.clone(),
                applied: v.mod_lock_post.locked,
                reason: None,
                summary: v.post.name.clone(),
            });
        }
        for v in &self.featured_posts {
            out.push(ModlogEntry {
                kind: ModlogKind::FeaturePost,
                when: v.mod_feature_post.when_,
                moderator: v.moderator.clone(),
                applied: v.mod_feature_post.featured,
                reason: None,
                summary: v.post.name.clone(),
            });
        }
        for v in &self.removed_comments {
            out.push(ModlogEntry {
                kind: ModlogKind::RemoveComment,
                when: v.mod_remove_comment.when_,
                moderator: v.moderator.clone(),
                applied: v.mod_remove_comment.removed,
                reason: v.mod_remove_comment.reason.clone(),
                summary: v.comment.content.clone(),
            });
        }
        for v in &self.banned_from_community {
            out.push(ModlogEntry {
                kind: ModlogKind::BanFromCommunity,
                when: v.mod_ban_from_community.when_,
                moderator: v.moderator.clone(),
                applied: v.mod_ban_from_community.banned,
                reason: v.mod_ban_from_community.reason.clone(),
                summary: format!("{} from {}", v.banned_person.full_name(), v.community.qualified_name()),
            });
        }
        for v in &self.banned {
            out.push(ModlogEntry {
                kind: ModlogKind::Ban,
                when: v.mod_ban.when_,
                moderator: v.moderator.clone(),
                applied: v.mod_ban.banned,
                reason: v.mod_ban.reason.clone(),
                summary: v.banned_person.full_name(),
            });
        }
        out.sort_by_key(|e| std::cmp::Reverse(e.when));
        out
    }
}
