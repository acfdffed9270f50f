//! Inbox sub-client. Every call needs a logged-in session.

use super::wire::{
    CommentReplyResponse, CreatePrivateMessage, GetPersonMentionsResponse, GetRepliesResponse,
    GetUnreadCountResponse, MarkCommentReplyAsRead, MarkPersonMentionAsRead,
    MarkPrivateMessageAsRead, PersonMentionResponse, PrivateMessageResponse,
    PrivateMessagesResponse,
};
use super::{CommentReplyView, PersonMentionView, PrivateMessageView};
use crate::client::LemmyClient;
use crate::error::SdkError;
use crate::network::DEFAULT_PAGE_LIMIT;
use crate::shared::{CommentReplyId, PersonId, PersonMentionId, PrivateMessageId, Query};

pub struct Inbox<'a> {
    pub(crate) client: &'a LemmyClient,
}

fn page_query(page: u32, unread_only: bool) -> Query {
    vec![
        ("page", page.to_string()),
        ("limit", DEFAULT_PAGE_LIMIT.to_string()),
        ("unread_only", unread_only.to_string()),
    ]
}

impl<'a> Inbox<'a> {
    pub async fn replies(&self, page: u32, unread_only: bool) -> Result<Vec<CommentReplyView>, SdkError> {
        let mut query = vec![("sort", "New".to_string())];
        query.extend(page_query(page, unread_only));
        let resp: GetRepliesResponse = self.client.http.get("user/replies", query).await?;
        Ok(resp.replies)
    }

    pub async fn mentions(&self, page: u32, unread_only: bool) -> Result<Vec<PersonMentionView>, SdkError> {
        let mut query = vec![("sort", "New".to_string())];
        query.extend(page_query(page, unread_only));
        let resp: GetPersonMentionsResponse = self.client.http.get("user/mention", query).await?;
        Ok(resp.mentions)
    }

    pub async fn private_messages(
        &self,
        page: u32,
        unread_only: bool,
    ) -> Result<Vec<PrivateMessageView>, SdkError> {
        let resp: PrivateMessagesResponse = self
            .client
            .http
            .get("private_message/list", page_query(page, unread_only))
            .await?;
        Ok(resp.private_messages)
    }

    pub async fn mark_reply_read(
        &self,
        comment_reply_id: CommentReplyId,
        read: bool,
    ) -> Result<CommentReplyView, SdkError> {
        let body = MarkCommentReplyAsRead {
            comment_reply_id,
            read,
        };
        let resp: CommentReplyResponse = self.client.http.post("comment/mark_as_read", &body).await?;
        Ok(resp.comment_reply_view)
    }

    pub async fn mark_mention_read(
        &self,
        person_mention_id: PersonMentionId,
        read: bool,
    ) -> Result<PersonMentionView, SdkError> {
        let body = MarkPersonMentionAsRead {
            person_mention_id,
            read,
        };
        let resp: PersonMentionResponse = self
            .client
            .http
            .post("user/mention/mark_as_read", &body)
            .await?;
        Ok(resp.person_mention_view)
    }

    pub async fn mark_message_read(
        &self,
        private_message_id: PrivateMessageId,
        read: bool,
    ) -> Result<PrivateMessageView, SdkError> {
        let body = MarkPrivateMessageAsRead {
            private_message_id,
            read,
        };
        let resp: PrivateMessageResponse = self
            .client
            .http
            .post("private_message/mark_as_read", &body)
            .await?;
        Ok(resp.private_message_view)
    }

    /// Mark every reply and mention read. Returns the (now read) replies.
    pub async fn mark_all_read(&self) -> Result<Vec<CommentReplyView>, SdkError> {
        let resp: GetRepliesResponse = self
            .client
            .http
            .post("user/mark_all_as_read", &serde_json::json!({}))
            .await?;
        Ok(resp.replies)
    }

    pub async fn send_message(
        &self,
        recipient_id: PersonId,
        content: &str,
    ) -> Result<PrivateMessageView, SdkError> {
        let body = CreatePrivateMessage {
            content: content.to_string(),
            recipient_id,
        };
        let resp: PrivateMessageResponse = self.client.http.post("private_message", &body).await?;
        Ok(resp.private_message_view)
    }

    pub async fn unread_count(&self) -> Result<GetUnreadCountResponse, SdkError> {
        Ok(self.client.http.get("user/unread_count", Vec::new()).await?)
    }
}
