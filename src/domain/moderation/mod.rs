//! Moderation domain: reports and the moderation log.

#[cfg(feature = "http")]
pub mod client;
pub mod modlog;
pub mod wire;

use crate::domain::comment::{Comment, CommentAggregates};
use crate::domain::community::Community;
use crate::domain::person::Person;
use crate::domain::post::{Post, PostAggregates};
use crate::shared::serde_util::lemmy_date;
use crate::shared::{CommentId, CommentReportId, PersonId, PostId, PostReportId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use modlog::{ModlogEntry, ModlogKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostReport {
    pub id: PostReportId,
    pub creator_id: PersonId,
    pub post_id: PostId,
    /// Post title at the time of the report.
    pub original_post_name: String,
    pub original_post_url: Option<String>,
    pub original_post_body: Option<String>,
    pub reason: String,
    pub resolved: bool,
    pub resolver_id: Option<PersonId>,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostReportView {
    pub post_report: PostReport,
    pub post: Post,
    pub community: Community,
    /// Who filed the report.
    pub creator: Person,
    pub post_creator: Person,
    #[serde(default)]
    pub creator_banned_from_community: bool,
    pub my_vote: Option<i8>,
    pub counts: PostAggregates,
    pub resolver: Option<Person>,
}

impl PostReportView {
    pub fn id(&self) -> PostReportId {
        self.post_report.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReport {
    pub id: CommentReportId,
    pub creator_id: PersonId,
    pub comment_id: CommentId,
    pub original_comment_text: String,
    pub reason: String,
    pub resolved: bool,
    pub resolver_id: Option<PersonId>,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReportView {
    pub comment_report: CommentReport,
    pub comment: Comment,
    pub post: Post,
    pub community: Community,
    pub creator: Person,
    pub comment_creator: Person,
    pub counts: CommentAggregates,
    #[serde(default)]
    pub creator_banned_from_community: bool,
    pub my_vote: Option<i8>,
    pub resolver: Option<Person>,
}

impl CommentReportView {
    pub fn id(&self) -> CommentReportId {
        self.comment_report.id
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::community::fixtures::community;
    use crate::domain::person::fixtures::person;
    use crate::domain::post::fixtures::post_view;
    use serde_json::{json, Value};

    pub fn post_report_view(id: i64, resolved: bool) -> Value {
        let post = post_view(9, 4, None);
        json!({
            "post_report": {
                "id": id,
                "creator_id": 6,
                "post_id": 9,
                "original_post_name": "post 9",
                "original_post_url": null,
                "original_post_body": null,
                "reason": "spam",
                "resolved": resolved,
                "resolver_id": null,
                "published": "2023-07-07T12:00:00.000001"
            },
            "post": post["post"],
            "community": community(3, "rust"),
            "creator": person(6, "bob"),
            "post_creator": person(5, "alice"),
            "creator_banned_from_community": false,
            "my_vote": null,
            "counts": post["counts"],
            "resolver": null
        })
    }
}
