//! Moderation sub-client: report queues, resolution, modlog.

use super::wire::{
    CommentReportResponse, GetModlogResponse, GetReportCountResponse, ListCommentReportsResponse,
    ListPostReportsResponse, ModlogFilter, PostReportResponse, ReportFilter, ResolveCommentReport,
    ResolvePostReport,
};
use super::{CommentReportView, PostReportView};
use crate::client::LemmyClient;
use crate::error::SdkError;
use crate::network::DEFAULT_PAGE_LIMIT;
use crate::shared::{CommentReportId, CommunityId, PostReportId, Query};

pub struct Moderation<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Moderation<'a> {
    pub async fn post_reports(
        &self,
        filter: ReportFilter,
        page: u32,
    ) -> Result<Vec<PostReportView>, SdkError> {
        let resp: ListPostReportsResponse = self
            .client
            .http
            .get("post/report/list", filter.to_query(page, DEFAULT_PAGE_LIMIT))
            .await?;
        Ok(resp.post_reports)
    }

    pub async fn comment_reports(
        &self,
        filter: ReportFilter,
        page: u32,
    ) -> Result<Vec<CommentReportView>, SdkError> {
        let resp: ListCommentReportsResponse = self
            .client
            .http
            .get("comment/report/list", filter.to_query(page, DEFAULT_PAGE_LIMIT))
            .await?;
        Ok(resp.comment_reports)
    }

    pub async fn resolve_post_report(
        &self,
        report_id: PostReportId,
        resolved: bool,
    ) -> Result<PostReportView, SdkError> {
        let body = ResolvePostReport {
            report_id,
            resolved,
        };
        let resp: PostReportResponse = self.client.http.put("post/report/resolve", &body).await?;
        Ok(resp.post_report_view)
    }

    pub async fn resolve_comment_report(
        &self,
        report_id: CommentReportId,
        resolved: bool,
    ) -> Result<CommentReportView, SdkError> {
        let body = ResolveCommentReport {
            report_id,
            resolved,
        };
        let resp: CommentReportResponse =
            self.client.http.put("comment/report/resolve", &body).await?;
        Ok(resp.comment_report_view)
    }

    /// Open report counts, site-wide or for one community.
    pub async fn report_count(
        &self,
        community_id: Option<CommunityId>,
    ) -> Result<GetReportCountResponse, SdkError> {
        let mut query: Query = Vec::new();
        crate::shared::push_opt(&mut query, "community_id", community_id);
        Ok(self.client.http.get("user/report_count", query).await?)
    }

    pub async fn modlog(&self, filter: ModlogFilter, page: u32) -> Result<GetModlogResponse, SdkError> {
        Ok(self
            .client
            .http
            .get("modlog", filter.to_query(page, DEFAULT_PAGE_LIMIT))
            .await?)
    }
}
