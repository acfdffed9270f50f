//! Wire types for report and modlog requests.

use super::{CommentReportView, PostReportView};
use crate::shared::{CommentReportId, CommunityId, PersonId, PostReportId, Query};
use serde::{Deserialize, Serialize};

pub use super::modlog::GetModlogResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostReportsResponse {
    pub post_reports: Vec<PostReportView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentReportsResponse {
    pub comment_reports: Vec<CommentReportView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReportResponse {
    pub post_report_view: PostReportView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentReportResponse {
    pub comment_report_view: CommentReportView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvePostReport {
    pub report_id: PostReportId,
    pub resolved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveCommentReport {
    pub report_id: CommentReportId,
    pub resolved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReportCountResponse {
    pub community_id: Option<CommunityId>,
    pub comment_reports: i64,
    pub post_reports: i64,
    #[serde(default)]
    pub private_message_reports: Option<i64>,
}

/// Filter for the report lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportFilter {
    pub community_id: Option<CommunityId>,
    pub unresolved_only: bool,
}

impl ReportFilter {
    pub(crate) fn to_query(self, page: u32, limit: u32) -> Query {
        let mut query: Query = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("unresolved_only", self.unresolved_only.to_string()),
        ];
        crate::shared::push_opt(&mut query, "community_id", self.community_id);
        query
    }
}

/// Filter for `GET modlog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModlogFilter {
    pub community_id: Option<CommunityId>,
    pub mod_person_id: Option<PersonId>,
    pub other_person_id: Option<PersonId>,
}

impl ModlogFilter {
    pub(crate) fn to_query(self, page: u32, limit: u32) -> Query {
        let mut query: Query = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("type_", "All".to_string()),
        ];
        crate::shared::push_opt(&mut query, "community_id", self.community_id);
        crate::shared::push_opt(&mut query, "mod_person_id", self.mod_person_id);
        crate::shared::push_opt(&mut query, "other_person_id", self.other_person_id);
        query
    }
}
