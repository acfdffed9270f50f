//! JSON bodies and client setup shared by the mock-server tests.

#![allow(dead_code)]

use std::time::Duration;

use lemmios_sdk::auth::Jwt;
use lemmios_sdk::client::LemmyClient;
use lemmios_sdk::http::{RetryConfig, RetryPolicy};
use serde_json::{json, Value};
use wiremock::MockServer;

/// A client against `server` that retries without waiting.
pub fn client(server: &MockServer) -> LemmyClient {
    LemmyClient::builder()
        .instance_url(&server.uri())
        .retry(RetryPolicy::Custom(RetryConfig::new(10, Duration::ZERO)))
        .build()
        .expect("client should build")
}

pub fn authed_client(server: &MockServer, token: &str) -> LemmyClient {
    LemmyClient::builder()
        .instance_url(&server.uri())
        .token(Jwt::new(token))
        .retry(RetryPolicy::Custom(RetryConfig::new(10, Duration::ZERO)))
        .build()
        .expect("client should build")
}

pub fn person(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "display_name": null,
        "avatar": null,
        "banned": false,
        "published": "2023-06-01T10:00:00.123456",
        "actor_id": format!("https://lemmy.ml/u/{name}"),
        "bio": null,
        "local": true,
        "banner": null,
        "deleted": false,
        "admin": false,
        "bot_account": false
    })
}

pub fn community(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "title": name,
        "description": null,
        "removed": false,
        "published": "2023-01-01T00:00:00",
        "deleted": false,
        "nsfw": false,
        "actor_id": format!("https://lemmy.ml/c/{name}"),
        "local": true,
        "icon": null,
        "banner": null
    })
}

pub fn post(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Post {id}"),
        "url": null,
        "body": null,
        "creator_id": 5,
        "community_id": 3,
        "removed": false,
        "locked": false,
        "published": "2023-07-04T02:11:43.086",
        "deleted": false,
        "nsfw": false,
        "embed_title": null,
        "embed_description": null,
        "thumbnail_url": null,
        "ap_id": format!("https://lemmy.ml/post/{id}"),
        "local": true,
        "language_id": 0,
        "featured_community": false,
        "featured_local": false
    })
}

pub fn post_view(id: i64, score: i64, my_vote: Option<i8>) -> Value {
    json!({
        "post": post(id),
        "creator": person(5, "alice"),
        "community": community(3, "rust"),
        "creator_banned_from_community": false,
        "counts": {
            "id": id,
            "post_id": id,
            "comments": 0,
            "score": score,
            "upvotes": score.max(0),
            "downvotes": 0,
            "published": "2023-07-04T02:11:43"
        },
        "subscribed": "NotSubscribed",
        "saved": false,
        "read": false,
        "creator_blocked": false,
        "my_vote": my_vote,
        "unread_comments": 0
    })
}

pub fn posts_page(first_id: i64, count: usize) -> Value {
    let posts: Vec<Value> = (0..count as i64)
        .map(|i| post_view(first_id + i, 1, None))
        .collect();
    json!({ "posts": posts })
}

pub fn comment_view(id: i64, path: &str, score: i64, upvotes: i64, my_vote: Option<i8>) -> Value {
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
        "post": post(9),
        "community": community(3, "rust"),
        "counts": {
            "id": id,
            "comment_id": id,
            "score": score,
            "upvotes": upvotes,
            "downvotes": upvotes - score,
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

pub fn person_view(id: i64, name: &str) -> Value {
    json!({
        "person": person(id, name),
        "counts": { "person_id": id, "post_count": 2, "comment_count": 7 }
    })
}

pub fn community_view(id: i64, name: &str, subscribed: &str) -> Value {
    json!({
        "community": community(id, name),
        "subscribed": subscribed,
        "blocked": false,
        "counts": { "community_id": id, "subscribers": 120, "posts": 40, "comments": 300 }
    })
}

pub fn post_report_view(id: i64, resolved: bool) -> Value {
    let reported = post_view(9, 4, None);
    json!({
        "post_report": {
            "id": id,
            "creator_id": 6,
            "post_id": 9,
            "original_post_name": "Post 9",
            "original_post_url": null,
            "original_post_body": null,
            "reason": "spam",
            "resolved": resolved,
            "resolver_id": if resolved { json!(1) } else { Value::Null },
            "published": "2023-07-07T12:00:00.000001"
        },
        "post": reported["post"],
        "community": community(3, "rust"),
        "creator": person(6, "bob"),
        "post_creator": person(5, "alice"),
        "creator_banned_from_community": false,
        "my_vote": null,
        "counts": reported["counts"],
        "resolver": if resolved { person(1, "mod") } else { Value::Null }
    })
}

pub fn comment_report_view(id: i64, comment_id: i64, resolved: bool) -> Value {
    let reported = comment_view(comment_id, &format!("0.{comment_id}"), 1, 1, None);
    json!({
        "comment_report": {
            "id": id,
            "creator_id": 5,
            "comment_id": comment_id,
            "original_comment_text": format!("comment {comment_id}"),
            "reason": "rude",
            "resolved": resolved,
            "resolver_id": null,
            "published": "2023-07-08T08:30:00"
        },
        "comment": reported["comment"],
        "post": post(9),
        "community": community(3, "rust"),
        "creator": person(5, "alice"),
        "comment_creator": person(6, "bob"),
        "counts": reported["counts"],
        "creator_banned_from_community": false,
        "my_vote": null,
        "resolver": null
    })
}

pub fn reply_view(reply_id: i64, comment_id: i64, read: bool) -> Value {
    let mut v = comment_view(comment_id, &format!("0.{comment_id}"), 1, 1, None);
    v["comment_reply"] = json!({
        "id": reply_id,
        "recipient_id": 1,
        "comment_id": comment_id,
        "read": read,
        "published": "2023-07-09T09:00:00"
    });
    v["recipient"] = person(1, "me");
    v
}

pub fn message_view(id: i64, content: &str, read: bool) -> Value {
    json!({
        "private_message": {
            "id": id,
            "creator_id": 1,
            "recipient_id": 6,
            "content": content,
            "deleted": false,
            "read": read,
            "published": "2023-07-09T10:00:00",
            "ap_id": format!("https://lemmy.ml/private_message/{id}"),
            "local": true
        },
        "creator": person(1, "me"),
        "recipient": person(6, "bob")
    })
}
