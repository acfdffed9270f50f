//! Wire types for comment requests and responses.

use super::CommentView;
use crate::network::DEFAULT_COMMENT_MAX_DEPTH;
use crate::shared::{CommentId, LanguageId, PersonId, PostId, Query, Sort};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommentsResponse {
    pub comments: Vec<CommentView>,
}

/// Response of every comment mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment_view: CommentView,
    #[serde(default)]
    pub recipient_ids: Vec<PersonId>,
    #[serde(default)]
    pub form_id: Option<String>,
}

/// Parameters of `GET comment/list`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentQuery {
    pub post_id: PostId,
    pub sort: Sort,
    pub max_depth: u32,
    /// Restrict to the subtree under this comment.
    pub parent_id: Option<CommentId>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub saved_only: bool,
}

impl CommentQuery {
    pub fn for_post(post_id: PostId, sort: Sort) -> Self {
        Self {
            post_id,
            sort,
            max_depth: DEFAULT_COMMENT_MAX_DEPTH,
            parent_id: None,
            page: None,
            limit: None,
            saved_only: false,
        }
    }

    pub fn under(mut self, parent_id: CommentId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        let mut query: Query = vec![
            ("post_id", self.post_id.to_string()),
            ("sort", self.sort.comment_param().to_string()),
            ("max_depth", self.max_depth.to_string()),
        ];
        crate::shared::push_opt(&mut query, "parent_id", self.parent_id);
        crate::shared::push_opt(&mut query, "page", self.page);
        crate::shared::push_opt(&mut query, "limit", self.limit);
        if self.saved_only {
            query.push(("saved_only", "true".to_string()));
        }
        query.push(("type_", "All".to_string()));
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub post_id: PostId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<LanguageId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditComment {
    pub comment_id: CommentId,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteComment {
    pub comment_id: CommentId,
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveComment {
    pub comment_id: CommentId,
    pub removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinguishComment {
    pub comment_id: CommentId,
    pub distinguished: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentLike {
    pub comment_id: CommentId,
    pub score: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveComment {
    pub comment_id: CommentId,
    pub save: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentReport {
    pub comment_id: CommentId,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::TopRange;

    #[test]
    fn test_comment_query_params() {
        let q = CommentQuery::for_post(PostId(9), Sort::Top(TopRange::Week))
            .under(CommentId(14))
            .to_query();
        assert_eq!(
            q,
            vec![
                ("post_id", "9".to_string()),
                ("sort", "Top".to_string()),
                ("max_depth", "8".to_string()),
                ("parent_id", "14".to_string()),
                ("type_", "All".to_string()),
            ]
        );
    }
}
