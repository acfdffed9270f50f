//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the server sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod feed;
pub mod serde_util;
pub mod sort;

pub use feed::{FeedSource, ListingType, ParseFeedSourceError};
pub use sort::{ParseTopRangeError, SearchType, Sort, TopRange};

use serde::{Deserialize, Serialize};

// ─── Ids ─────────────────────────────────────────────────────────────────────

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

id_newtype!(
    /// Server-assigned post id.
    PostId
);
id_newtype!(
    /// Server-assigned comment id.
    CommentId
);
id_newtype!(
    /// Server-assigned community id.
    CommunityId
);
id_newtype!(
    /// Server-assigned person (user) id.
    PersonId
);
id_newtype!(CommentReplyId);
id_newtype!(PersonMentionId);
id_newtype!(PrivateMessageId);
id_newtype!(PostReportId);
id_newtype!(CommentReportId);
id_newtype!(LanguageId);

// ─── Query helpers ───────────────────────────────────────────────────────────

/// Ordered query parameters for one request.
pub type Query = Vec<(&'static str, String)>;

/// Push `name=value` only when `value` is present.
pub(crate) fn push_opt<T: ToString>(query: &mut Query, name: &'static str, value: Option<T>) {
    if let Some(v) = value {
        query.push((name, v.to_string()));
    }
}
