//! Inbox domain: replies, mentions, private messages.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::comment::CommentView;
use crate::domain::person::Person;
use crate::shared::serde_util::lemmy_date;
use crate::shared::{CommentId, CommentReplyId, PersonId, PersonMentionId, PrivateMessageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReply {
    pub id: CommentReplyId,
    pub recipient_id: PersonId,
    pub comment_id: CommentId,
    pub read: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
}

/// A reply to one of the account's posts or comments.
///
/// The server sends the comment fields and the reply record in one object;
/// both decode from it. Identity is the comment's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentReplyView {
    #[serde(flatten)]
    pub comment: CommentView,
    pub comment_reply: CommentReply,
    pub recipient: Person,
}

impl CommentReplyView {
    pub fn id(&self) -> CommentId {
        self.comment.id()
    }
}

impl PartialEq for CommentReplyView {
    fn eq(&self, other: &Self) -> bool {
        self.comment == other.comment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonMention {
    pub id: PersonMentionId,
    pub recipient_id: PersonId,
    pub comment_id: CommentId,
    pub read: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
}

/// A comment that mentions the account by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMentionView {
    #[serde(flatten)]
    pub comment: CommentView,
    pub person_mention: PersonMention,
    pub recipient: Person,
}

impl PersonMentionView {
    pub fn id(&self) -> CommentId {
        self.comment.id()
    }
}

impl PartialEq for PersonMentionView {
    fn eq(&self, other: &Self) -> bool {
        self.comment == other.comment
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateMessage {
    pub id: PrivateMessageId,
    pub creator_id: PersonId,
    pub recipient_id: PersonId,
    pub content: String,
    pub deleted: bool,
    pub read: bool,
    #[serde(with = "lemmy_date")]
    pub published: DateTime<Utc>,
    #[serde(default, with = "lemmy_date::option")]
    pub updated: Option<DateTime<Utc>>,
    pub ap_id: String,
    pub local: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateMessageView {
    pub private_message: PrivateMessage,
    pub creator: Person,
    pub recipient: Person,
}

impl PrivateMessageView {
    pub fn id(&self) -> PrivateMessageId {
        self.private_message.id
    }
}

/// Any inbox entry, for a merged newest-first list.
#[derive(Debug, Clone, PartialEq)]
pub enum InboxItem {
    Reply(CommentReplyView),
    Mention(PersonMentionView),
    Message(PrivateMessageView),
}

impl InboxItem {
    pub fn published(&self) -> DateTime<Utc> {
        match self {
            InboxItem::Reply(r) => r.comment_reply.published,
            InboxItem::Mention(m) => m.person_mention.published,
            InboxItem::Message(m) => m.private_message.published,
        }
    }

    pub fn is_read(&self) -> bool {
        match self {
            InboxItem::Reply(r) => r.comment_reply.read,
            InboxItem::Mention(m) => m.person_mention.read,
            InboxItem::Message(m) => m.private_message.read,
        }
    }

    pub fn sender(&self) -> &Person {
        match self {
            InboxItem::Reply(r) => &r.comment.creator,
            InboxItem::Mention(m) => &m.comment.creator,
            InboxItem::Message(m) => &m.creator,
        }
    }
}

/// Merge one page of each inbox list, newest first.
pub fn merge_inbox(
    replies: Vec<CommentReplyView>,
    mentions: Vec<PersonMentionView>,
    messages: Vec<PrivateMessageView>,
) -> Vec<InboxItem> {
    let mut items: Vec<InboxItem> = replies
        .into_iter()
        .map(InboxItem::Reply)
        .chain(mentions.into_iter().map(InboxItem::Mention))
        .chain(messages.into_iter().map(InboxItem::Message))
        .collect();
    items.sort_by_key(|item| std::cmp::Reverse(item.published()));
    items
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_view_decodes_from_one_object() {
        let v: CommentReplyView =
            serde_json::from_value(fixtures::reply_view(3, 77, "2023-07-05T08:00:00.25", false))
                .unwrap();
        assert_eq!(v.id(), CommentId(77));
        assert_eq!(v.comment_reply.id, CommentReplyId(3));
        assert_eq!(v.recipient.name, "me");
        assert_eq!(v.comment.creator.name, "bob");
    }

    #[test]
    fn test_reply_equality_uses_comment() {
        let a: CommentReplyView =
            serde_json::from_value(fixtures::reply_view(3, 77, "2023-07-05T08:00:00", false))
                .unwrap();
        let b: CommentReplyView =
            serde_json::from_value(fixtures::reply_view(4, 77, "2023-07-06T08:00:00", true))
                .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_inbox_newest_first() {
        let reply: CommentReplyView =
            serde_json::from_value(fixtures::reply_view(3, 77, "2023-07-05T08:00:00", true))
                .unwrap();
        let message: PrivateMessageView =
            serde_json::from_value(fixtures::message_view(9, "2023-07-06T08:00:00.5")).unwrap();
        let items = merge_inbox(vec![reply], vec![], vec![message]);
        assert!(matches!(items[0], InboxItem::Message(_)));
        assert!(!items[0].is_read());
        assert!(items[1].is_read());
        assert_eq!(items[1].sender().name, "bob");
    }
}
