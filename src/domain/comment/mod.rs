//! Comment domain: comments, reply trees, votes.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::domain::community::{Community, SubscribedType};
use crate::domain::person::Person;
use crate::domain::post::Post;
use crate::shared::serde_util::lemmy_date;
use crate::shared::{CommentId, LanguageId, PersonId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::{flatten_tree, CommentNode};
#[cfg(feature = "http")]
pub use state::CommentThread;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub creator_id: PersonId,
    pub post_id: PostId,
    pub content: String,
    pub removed: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub ap_id: String,
    pub local: bool,
    /// Dot-separated ancestor chain, e.g. `0.5.9`.
    pub path: String,
    #[serde(default)]
    pub distinguished: bool,
    #[serde(default)]
    pub language_id: Option<LanguageId>,
}

impl Comment {
    pub fn parsed_path(&self) -> Result<CommentPath, InvalidCommentPath> {
        self.path.parse()
    }

    /// Nesting depth; 0 for a top-level comment.
    pub fn depth(&self) -> usize {
        self.parsed_path().map(|p| p.depth()).unwrap_or(0)
    }

    /// Parent comment, or `None` for a top-level comment.
    pub fn parent_id(&self) -> Option<CommentId> {
        self.parsed_path().ok().and_then(|p| p.parent_id())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAggregates {
    pub comment_id: CommentId,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    /// Number of descendants, at any depth.
    #[serde(default)]
    pub child_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    pub counts: CommentAggregates,
    #[serde(default)]
    pub creator_banned_from_community: bool,
    #[serde(default)]
    pub subscribed: SubscribedType,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub creator_blocked: bool,
    pub my_vote: Option<i8>,
}

impl CommentView {
    pub fn id(&self) -> CommentId {
        self.comment.id
    }
}

// ─── CommentPath ─────────────────────────────────────────────────────────────

/// A parsed `comment.path`: the root marker `0`, the ancestors, then the
/// comment itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentPath(Vec<i64>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCommentPath(pub String);

impl fmt::Display for InvalidCommentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid comment path: {:?}", self.0)
    }
}

impl std::error::Error for InvalidCommentPath {}

impl std::str::FromStr for CommentPath {
    type Err = InvalidCommentPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split('.')
            .map(str::parse::<i64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InvalidCommentPath(s.to_string()))?;
        if segments.len() < 2 {
            return Err(InvalidCommentPath(s.to_string()));
        }
        Ok(CommentPath(segments))
    }
}

impl fmt::Display for CommentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(i64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl CommentPath {
    /// Segment count minus two.
    pub fn depth(&self) -> usize {
        self.0.len() - 2
    }

    /// Second-to-last segment, unless it is the root marker.
    pub fn parent_id(&self) -> Option<CommentId> {
        match self.0[self.0.len() - 2] {
            0 => None,
            id => Some(CommentId(id)),
        }
    }

    pub fn comment_id(&self) -> CommentId {
        CommentId(self.0[self.0.len() - 1])
    }

    /// Ancestor ids, outermost first, excluding the root marker.
    pub fn ancestors(&self) -> impl Iterator<Item = CommentId> + '_ {
        self.0[1..self.0.len() - 1].iter().map(|id| CommentId(*id))
    }

    pub fn is_descendant_of(&self, id: CommentId) -> bool {
        self.ancestors().any(|a| a == id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::community::fixtures::community;
    use crate::domain::person::fixtures::person;
    use crate::domain::post::fixtures::post_view;
    use serde_json::{json, Value};

    pub fn comment_view(id: i64, path: &str, score: i64, my_vote: Option<i8>) -> Value {
        json!({
            "comment": {
                "id": id,
                "creator_id": 6,
                "post_id": 9,
                "content": format!("comment {id}"),
                "removed": false,
                "published": "2023-07-04T03:00:00",
                "deleted": false,
                "ap_id": format!("https://lemmy.ml/comment/{id}"),
                "local": true,
                "path": path,
                "distinguished": false,
                "language_id": 0
            },
            "creator": person(6, "bob"),
            "post": post_view(9, 1, None)["post"].clone(),
            "community": community(3, "rust"),
            "counts": {
                "id": id,
                "comment_id": id,
                "score": score,
                "upvotes": score.max(0),
                "downvotes": 0,
                "published": "2023-07-04T03:00:00.5",
                "child_count": 0
            },
            "creator_banned_from_community": false,
            "subscribed": "NotSubscribed",
            "saved": false,
            "creator_blocked": false,
            "my_vote": my_vote
        })
    }
}
