//! Posts sub-client: feeds, single posts, mutations.

use super::wire::{
    CreatePost, CreatePostLike, CreatePostReport, DeletePost, EditPost, FeaturePost,
    GetPostResponse, GetPostsResponse, LockPost, MarkPostAsRead, PostResponse, RemovePost, SavePost,
};
use super::{PostFeatureType, PostView};
use crate::client::LemmyClient;
use crate::domain::moderation::wire::PostReportResponse;
use crate::domain::moderation::PostReportView;
use crate::error::SdkError;
use crate::network::DEFAULT_PAGE_LIMIT;
use crate::shared::{FeedSource, PostId, Query, Sort};
use crate::state::{self, VoteDirection};

pub struct Posts<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Posts<'a> {
    /// One page (starting at 1) of a feed. An empty page means the feed is exhausted.
    pub async fn list(
        &self,
        source: &FeedSource,
        sort: Sort,
        page: u32,
    ) -> Result<Vec<PostView>, SdkError> {
        let mut query: Query = vec![
            ("sort", sort.post_param()),
            ("page", page.to_string()),
            ("limit", DEFAULT_PAGE_LIMIT.to_string()),
        ];
        match source {
            FeedSource::Listing(listing) => query.push(("type_", listing.as_str().to_string())),
            FeedSource::Community(name) => query.push(("community_name", name.clone())),
        }
        let resp: GetPostsResponse = self.client.http.get("post/list", query).await?;
        Ok(resp.posts)
    }

    /// One page of the account's saved posts.
    pub async fn saved(&self, sort: Sort, page: u32) -> Result<Vec<PostView>, SdkError> {
        let query = vec![
            ("sort", sort.post_param()),
            ("page", page.to_string()),
            ("limit", DEFAULT_PAGE_LIMIT.to_string()),
            ("saved_only", "true".to_string()),
        ];
        let resp: GetPostsResponse = self.client.http.get("post/list", query).await?;
        Ok(resp.posts)
    }

    pub async fn get(&self, post_id: PostId) -> Result<GetPostResponse, SdkError> {
        let query = vec![("id", post_id.to_string())];
        Ok(self.client.http.get("post", query).await?)
    }

    pub async fn create(&self, request: &CreatePost) -> Result<PostView, SdkError> {
        let resp: PostResponse = self.client.http.post("post", request).await?;
        Ok(resp.post_view)
    }

    pub async fn edit(&self, request: &EditPost) -> Result<PostView, SdkError> {
        let resp: PostResponse = self.client.http.put("post", request).await?;
        Ok(resp.post_view)
    }

    pub async fn delete(&self, post_id: PostId, deleted: bool) -> Result<PostView, SdkError> {
        let body = DeletePost { post_id, deleted };
        let resp: PostResponse = self.client.http.post("post/delete", &body).await?;
        Ok(resp.post_view)
    }

    /// Moderator removal.
    pub async fn remove(
        &self,
        post_id: PostId,
        removed: bool,
        reason: Option<String>,
    ) -> Result<PostView, SdkError> {
        let body = RemovePost {
            post_id,
            removed,
            reason,
        };
        let resp: PostResponse = self.client.http.post("post/remove", &body).await?;
        Ok(resp.post_view)
    }

    pub async fn lock(&self, post_id: PostId, locked: bool) -> Result<PostView, SdkError> {
        let body = LockPost { post_id, locked };
        let resp: PostResponse = self.client.http.post("post/lock", &body).await?;
        Ok(resp.post_view)
    }

    pub async fn feature(
        &self,
        post_id: PostId,
        featured: bool,
        feature_type: PostFeatureType,
    ) -> Result<PostView, SdkError> {
        let body = FeaturePost {
            post_id,
            featured,
            feature_type,
        };
        let resp: PostResponse = self.client.http.post("post/feature", &body).await?;
        Ok(resp.post_view)
    }

    /// Send `score` (-1, 0 or 1) for a post.
    pub async fn vote(&self, post_id: PostId, score: i8) -> Result<PostView, SdkError> {
        if !(-1..=1).contains(&score) {
            return Err(SdkError::Validation(format!("Invalid vote score {score}")));
        }
        let body = CreatePostLike { post_id, score };
        let resp: PostResponse = self.client.http.post("post/like", &body).await?;
        Ok(resp.post_view)
    }

    /// Toggle-vote `post` in `direction` and reconcile it with the server's counts.
    pub async fn vote_on(
        &self,
        post: &mut PostView,
        direction: VoteDirection,
    ) -> Result<PostView, SdkError> {
        let post_id = post.id();
        state::vote(post, direction, |score| self.vote(post_id, score)).await
    }

    pub async fn save(&self, post_id: PostId, save: bool) -> Result<PostView, SdkError> {
        let body = SavePost { post_id, save };
        let resp: PostResponse = self.client.http.put("post/save", &body).await?;
        Ok(resp.post_view)
    }

    pub async fn mark_read(&self, post_id: PostId, read: bool) -> Result<PostView, SdkError> {
        let body = MarkPostAsRead { post_id, read };
        let resp: PostResponse = self.client.http.post("post/mark_as_read", &body).await?;
        Ok(resp.post_view)
    }

    pub async fn report(&self, post_id: PostId, reason: &str) -> Result<PostReportView, SdkError> {
        let body = CreatePostReport {
            post_id,
            reason: reason.to_string(),
        };
        let resp: PostReportResponse = self.client.http.post("post/report", &body).await?;
        Ok(resp.post_report_view)
    }
}
