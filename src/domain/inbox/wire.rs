//! Wire types for inbox requests and responses.

use super::{CommentReplyView, PersonMentionView, PrivateMessageView};
use crate::shared::{CommentReplyId, PersonId, PersonMentionId, PrivateMessageId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRepliesResponse {
    pub replies: Vec<CommentReplyView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPersonMentionsResponse {
    pub mentions: Vec<PersonMentionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateMessagesResponse {
    pub private_messages: Vec<PrivateMessageView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateMessageResponse {
    pub private_message_view: PrivateMessageView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentReplyResponse {
    pub comment_reply_view: CommentReplyView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMentionResponse {
    pub person_mention_view: PersonMentionView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetUnreadCountResponse {
    pub replies: i64,
    pub mentions: i64,
    pub private_messages: i64,
}

impl GetUnreadCountResponse {
    pub fn total(&self) -> i64 {
        self.replies + self.mentions + self.private_messages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkCommentReplyAsRead {
    pub comment_reply_id: CommentReplyId,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkPersonMentionAsRead {
    pub person_mention_id: PersonMentionId,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkPrivateMessageAsRead {
    pub private_message_id: PrivateMessageId,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrivateMessage {
    pub content: String,
    pub recipient_id: PersonId,
}
