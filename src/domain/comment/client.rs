//! Comments sub-client: listing, authoring, moderation, votes.

use super::wire::{
    CommentQuery, CommentResponse, CreateComment, CreateCommentLike,
    CreateCommentReport, DeleteComment, DistinguishComment, EditComment, GetCommentsResponse,
    RemoveComment, SaveComment,
};
use super::CommentView;
use crate::client::LemmyClient;
use crate::domain::moderation::wire::CommentReportResponse;
use crate::domain::moderation::CommentReportView;
use crate::error::SdkError;
use crate::shared::{CommentId, PostId};
use crate::state::{self, VoteDirection};

pub struct Comments<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Comments<'a> {
    pub async fn list(&self, query: &CommentQuery) -> Result<Vec<CommentView>, SdkError> {
        if !query.sort.valid_for_comments() {
            return Err(SdkError::Validation(format!(
                "{} cannot be used for comments",
                query.sort.name()
            )));
        }
        let resp: GetCommentsResponse = self
            .client
            .http
            .get("comment/list", query.to_query())
            .await?;
        Ok(resp.comments)
    }

    /// Reply to a post (`parent_id = None`) or to a comment.
    pub async fn create(
        &self,
        post_id: PostId,
        parent_id: Option<CommentId>,
        content: &str,
    ) -> Result<CommentView, SdkError> {
        let body = CreateComment {
            content: content.to_string(),
            post_id,
            parent_id,
            language_id: None,
        };
        let resp: CommentResponse = self.client.http.post("comment", &body).await?;
        Ok(resp.comment_view)
    }

    pub async fn edit(&self, comment_id: CommentId, content: &str) -> Result<CommentView, SdkError> {
        let body = EditComment {
            comment_id,
            content: content.to_string(),
        };
        let resp: CommentResponse = self.client.http.put("comment", &body).await?;
        Ok(resp.comment_view)
    }

    pub async fn delete(&self, comment_id: CommentId, deleted: bool) -> Result<CommentView, SdkError> {
        let body = DeleteComment {
            comment_id,
            deleted,
        };
        let resp: CommentResponse = self.client.http.post("comment/delete", &body).await?;
        Ok(resp.comment_view)
    }

    pub async fn remove(
        &self,
        comment_id: CommentId,
        removed: bool,
        reason: Option<String>,
    ) -> Result<CommentView, SdkError> {
        let body = RemoveComment {
            comment_id,
            removed,
            reason,
        };
        let resp: CommentResponse = self.client.http.post("comment/remove", &body).await?;
        Ok(resp.comment_view)
    }

    /// Mark a moderator's comment as speaking for the community.
    pub async fn distinguish(
        &self,
        comment_id: CommentId,
        distinguished: bool,
    ) -> Result<CommentView, SdkError> {
        let body = DistinguishComment {
            comment_id,
            distinguished,
        };
        let resp: CommentResponse = self.client.http.post("comment/distinguish", &body).await?;
        Ok(resp.comment_view)
    }

    pub async fn vote(&self, comment_id: CommentId, score: i8) -> Result<CommentView, SdkError> {
        if !(-1..=1).contains(&score) {
            return Err(SdkError::Validation(format!("Invalid vote score {score}")));
        }
        let body = CreateCommentLike { comment_id, score };
        let resp: CommentResponse = self.client.http.post("comment/like", &body).await?;
        Ok(resp.comment_view)
    }

    pub async fn vote_on(
        &self,
        comment: &mut CommentView,
        direction: VoteDirection,
    ) -> Result<CommentView, SdkError> {
        let comment_id = comment.id();
        state::vote(comment, direction, |score| self.vote(comment_id, score)).await
    }

    pub async fn save(&self, comment_id: CommentId, save: bool) -> Result<CommentView, SdkError> {
        let body = SaveComment { comment_id, save };
        let resp: CommentResponse = self.client.http.put("comment/save", &body).await?;
        Ok(resp.comment_view)
    }

    pub async fn report(
        &self,
        comment_id: CommentId,
        reason: &str,
    ) -> Result<CommentReportView, SdkError> {
        let body = CreateCommentReport {
            comment_id,
            reason: reason.to_string(),
        };
        let resp: CommentReportResponse = self.client.http.post("comment/report", &body).await?;
        Ok(resp.comment_report_view)
    }
}
