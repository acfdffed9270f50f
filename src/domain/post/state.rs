//! Post state containers: app-owned, SDK-provided update logic.

use super::PostView;
use crate::state::{Votable, VoteTally};

impl Votable for PostView {
    fn vote_tally(&self) -> VoteTally {
        VoteTally {
            score: self.counts.score,
            upvotes: self.counts.upvotes,
            downvotes: self.counts.downvotes,
            my_vote: self.my_vote.unwrap_or(0),
        }
    }

    fn apply_tally(&mut self, tally: VoteTally) {
        self.counts.score = tally.score;
        self.counts.upvotes = tally.upvotes;
        self.counts.downvotes = tally.downvotes;
        self.my_vote = Some(tally.my_vote);
    }
}

#[cfg(feature = "http")]
pub use feed::PostFeed;

#[cfg(feature = "http")]
mod feed {
    use super::PostView;
    use crate::client::LemmyClient;
    use async_lock::RwLock;
    use std::sync::Arc;
    use crate::error::SdkError;
    use crate::shared::{FeedSource, PostId, Sort};
    use crate::state::{target_vote, CursorState, PageOutcome, SharedCursor, Votable, VoteDirection};

    /// A scrolling post feed: one cursor over `post/list` for a source and sort.
    ///
    /// Cheap to clone; clones share the same cursor and the same sort.
    #[derive(Clone)]
    pub struct PostFeed {
        source: Arc<FeedSource>,
        sort: Arc<RwLock<Sort>>,
        cursor: SharedCursor<PostView>,
    }

    impl PostFeed {
        pub fn new(source: FeedSource, sort: Sort) -> Self {
            Self {
                source: Arc::new(source),
                sort: Arc::new(RwLock::new(sort)),
                cursor: SharedCursor::new(),
            }
        }

        pub fn source(&self) -> &FeedSource {
            &self.source
        }

        pub async fn sort(&self) -> Sort {
            *self.sort.read().await
        }

        pub async fn state(&self) -> CursorState {
            self.cursor.state().await
        }

        pub async fn posts(&self) -> Vec<PostView> {
            self.cursor.items().await
        }

        /// Load the next page unless a fetch is already running or the feed is
        /// done or failed.
        pub async fn fetch_more(&self, client: &LemmyClient) -> PageOutcome<SdkError> {
            let posts = client.posts();
            let source = &*self.source;
            let sort = &self.sort;
            // The sort is read after the page is claimed, so a concurrent
            // `set_sort` either lands first or turns this page stale.
            self.cursor
                .fetch_more(|page| async move {
                    let sort = *sort.read().await;
                    posts.list(source, sort, page).await
                })
                .await
        }

        /// Drop everything and start over from page 1.
        pub async fn refresh(&self) {
            self.cursor.reset().await;
        }

        /// Re-arm a failed feed on the page that failed.
        pub async fn retry(&self) -> bool {
            self.cursor.retry().await
        }

        /// Switch sort order for every clone; the feed restarts.
        pub async fn set_sort(&self, sort: Sort) {
            *self.sort.write().await = sort;
            self.cursor.reset().await;
        }

        /// Replace the stored snapshot of a post (after an edit, save, etc.).
        pub async fn replace(&self, post: PostView) -> bool {
            self.cursor
                .with(|c| match c.items_mut().iter_mut().find(|p| p.id() == post.id()) {
                    Some(slot) => {
                        *slot = post;
                        true
                    }
                    None => false,
                })
                .await
        }

        /// Toggle-vote a post in the feed. The stored snapshot only changes
        /// once the server answers; on failure it is left as it was.
        pub async fn vote(
            &self,
            client: &LemmyClient,
            post_id: PostId,
            direction: VoteDirection,
        ) -> Result<PostView, SdkError> {
            let current = self
                .cursor
                .with(|c| c.items().iter().find(|p| p.id() == post_id).map(Votable::likes))
                .await
                .ok_or_else(|| SdkError::Validation(format!("Post {post_id} is not in this feed")))?;

            let updated = client
                .posts()
                .vote(post_id, target_vote(current, direction))
                .await?;

            let tally = updated.vote_tally();
            self.cursor
                .with(|c| {
                    if let Some(p) = c.items_mut().iter_mut().find(|p| p.id() == post_id) {
                        p.apply_tally(tally);
                    }
                })
                .await;
            Ok(updated)
        }

        /// Toggle the saved flag of a post in the feed.
        pub async fn toggle_save(
            &self,
            client: &LemmyClient,
            post_id: PostId,
        ) -> Result<PostView, SdkError> {
            let saved = self
                .cursor
                .with(|c| c.items().iter().find(|p| p.id() == post_id).map(|p| p.saved))
                .await
                .ok_or_else(|| SdkError::Validation(format!("Post {post_id} is not in this feed")))?;
            let updated = client.posts().save(post_id, !saved).await?;
            self.replace(updated.clone()).await;
            Ok(updated)
        }
    }
}
