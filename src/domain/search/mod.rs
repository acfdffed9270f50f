//! Search domain: full-text search and federated object lookup.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::comment::CommentView;
use crate::domain::community::CommunityView;
use crate::domain::person::PersonView;
use crate::domain::post::PostView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub type_: String,
    #[serde(default)]
    pub comments: Vec<CommentView>,
    #[serde(default)]
    pub posts: Vec<PostView>,
    #[serde(default)]
    pub communities: Vec<CommunityView>,
    #[serde(default)]
    pub users: Vec<PersonView>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
            && self.posts.is_empty()
            && self.communities.is_empty()
            && self.users.is_empty()
    }
}

/// Result of resolving an ActivityPub id; at most one field is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveObjectResponse {
    pub comment: Option<CommentView>,
    pub post: Option<PostView>,
    pub community: Option<CommunityView>,
    pub person: Option<PersonView>,
}

/// The single object a resolve returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedObject {
    Comment(Box<CommentView>),
    Post(Box<PostView>),
    Community(Box<CommunityView>),
    Person(Box<PersonView>),
}

impl ResolveObjectResponse {
    pub fn into_object(self) -> Option<ResolvedObject> {
        if let Some(c) = self.comment {
            return Some(ResolvedObject::Comment(Box::new(c)));
        }
        if let Some(p) = self.post {
            return Some(ResolvedObject::Post(Box::new(p)));
        }
        if let Some(c) = self.community {
            return Some(ResolvedObject::Community(Box::new(c)));
        }
        self.person.map(|p| ResolvedObject::Person(Box::new(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::community::fixtures::community_view;
    use serde_json::json;

    #[test]
    fn test_search_response_missing_lists() {
        let r: SearchResponse = serde_json::from_value(json!({ "type_": "Communities",
            "communities": [community_view(3, "rust")] }))
        .unwrap();
        assert!(r.posts.is_empty());
        assert_eq!(r.communities.len(), 1);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_resolve_picks_present_object() {
        let r: ResolveObjectResponse =
            serde_json::from_value(json!({ "community": community_view(3, "rust") })).unwrap();
        assert!(matches!(r.into_object(), Some(ResolvedObject::Community(_))));
        assert!(ResolveObjectResponse::default().into_object().is_none());
    }
}
