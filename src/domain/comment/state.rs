//! Comment state containers: app-owned, SDK-provided update logic.

use super::CommentView;
use crate::shared::CommentId;
use crate::state::{Votable, VoteTally};
use std::collections::{HashMap, HashSet};

impl Votable for CommentView {
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

/// One row of a flattened comment tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommentNode<'a> {
    pub comment: &'a CommentView,
    pub depth: usize,
}

/// Order `comments` depth-first: every comment directly follows its parent
/// (or an earlier sibling's subtree), siblings keep their listing order.
///
/// Duplicates by id keep the first occurrence. A comment whose parent is not
/// in the set is treated as a root.
pub fn flatten_tree<'a, I>(comments: I) -> Vec<CommentNode<'a>>
where
    I: IntoIterator<Item = &'a CommentView>,
{
    let mut seen = HashSet::new();
    let unique: Vec<&CommentView> = comments.into_iter().filter(|c| seen.insert(c.id())).collect();

    let mut children: HashMap<CommentId, Vec<&CommentView>> = HashMap::new();
    let mut roots = Vec::new();
    for c in &unique {
        match c.comment.parent_id() {
            Some(parent) if seen.contains(&parent) => children.entry(parent).or_default().push(*c),
            _ => roots.push(*c),
        }
    }

    let mut out = Vec::with_capacity(unique.len());
    let mut stack: Vec<&CommentView> = roots.into_iter().rev().collect();
    while let Some(c) = stack.pop() {
        out.push(CommentNode {
            comment: c,
            depth: c.comment.depth(),
        });
        if let Some(kids) = children.get(&c.id()) {
            stack.extend(kids.iter().rev());
        }
    }
    out
}

#[cfg(feature = "http")]
pub use thread::CommentThread;

#[cfg(feature = "http")]
mod thread {
    use super::{flatten_tree, CommentNode, CommentView};
    use crate::client::LemmyClient;
    use crate::domain::comment::wire::CommentQuery;
    use crate::error::SdkError;
    use crate::shared::{CommentId, PostId, Sort};
    use crate::state::{
        target_vote, Cursor, CursorState, PageOutcome, SubtreeCursors, SubtreeState, Votable,
        VoteDirection,
    };

    /// The comments of one post: paged top-level listing plus per-comment
    /// "load more replies" expansion.
    #[derive(Debug)]
    pub struct CommentThread {
        post_id: PostId,
        sort: Sort,
        pages: Cursor<CommentView>,
        subtrees: SubtreeCursors<CommentId, CommentView>,
    }

    impl CommentThread {
        pub fn new(post_id: PostId, sort: Sort) -> Self {
            Self {
                post_id,
                sort,
                pages: Cursor::new(),
                subtrees: SubtreeCursors::new(),
            }
        }

        pub fn post_id(&self) -> PostId {
            self.post_id
        }

        pub fn sort(&self) -> Sort {
            self.sort
        }

        pub fn state(&self) -> CursorState {
            self.pages.state()
        }

        pub fn expansion_state(&self, parent: CommentId) -> SubtreeState {
            self.subtrees.state(&parent)
        }

        pub async fn fetch_more(&mut self, client: &LemmyClient) -> PageOutcome<SdkError> {
            let comments = client.comments();
            let base = CommentQuery::for_post(self.post_id, self.sort);
            self.pages
                .fetch_more(|page| async move { comments.list(&base.page(page)).await })
                .await
        }

        /// Load the replies under `parent` that the depth limit cut off.
        pub async fn expand(&mut self, client: &LemmyClient, parent: CommentId) -> PageOutcome<SdkError> {
            let comments = client.comments();
            let query = CommentQuery::for_post(self.post_id, self.sort).under(parent);
            self.subtrees
                .fetch(parent, |_| async move {
                    comments
                        .list(&query)
                        .await
                        .map(|list| list.into_iter().filter(|c| c.id() != parent).collect())
                })
                .await
        }

        pub fn retry(&mut self) -> bool {
            self.pages.retry()
        }

        pub fn retry_expand(&mut self, parent: CommentId) -> bool {
            self.subtrees.retry(&parent)
        }

        pub fn reset(&mut self) {
            self.pages.reset();
            self.subtrees.reset();
        }

        pub fn set_sort(&mut self, sort: Sort) {
            self.sort = sort;
            self.reset();
        }

        fn all(&self) -> impl Iterator<Item = &CommentView> {
            self.pages.items().iter().chain(self.subtrees.values())
        }

        fn all_mut(&mut self) -> impl Iterator<Item = &mut CommentView> {
            self.pages.items_mut().iter_mut().chain(self.subtrees.values_mut())
        }

        pub fn get(&self, id: CommentId) -> Option<&CommentView> {
            self.all().find(|c| c.id() == id)
        }

        /// Everything loaded so far, in display order.
        pub fn tree(&self) -> Vec<CommentNode<'_>> {
            flatten_tree(self.all())
        }

        /// Direct replies to `parent` that are loaded.
        pub fn children_of(&self, parent: CommentId) -> Vec<&CommentView> {
            let mut seen = std::collections::HashSet::new();
            self.all()
                .filter(|c| c.comment.parent_id() == Some(parent))
                .filter(|c| seen.insert(c.id()))
                .collect()
        }

        /// Whether `id` has replies the server has not sent yet.
        pub fn has_unloaded_replies(&self, id: CommentId) -> bool {
            let Some(c) = self.get(id) else {
                return false;
            };
            c.counts.child_count > 0
                && self.children_of(id).is_empty()
                && self.subtrees.state(&id) != SubtreeState::Done
        }

        /// Replace every stored copy of a comment.
        pub fn replace(&mut self, comment: CommentView) -> bool {
            let mut found = false;
            for slot in self.all_mut().filter(|c| c.id() == comment.id()) {
                *slot = comment.clone();
                found = true;
            }
            found
        }

        /// Toggle-vote a loaded comment; committed only after the server answers.
        pub async fn vote(
            &mut self,
            client: &LemmyClient,
            comment_id: CommentId,
            direction: VoteDirection,
        ) -> Result<CommentView, SdkError> {
            let current = self
                .get(comment_id)
                .map(Votable::likes)
                .ok_or_else(|| SdkError::Validation(format!("Comment {comment_id} is not loaded")))?;
            let updated = client
                .comments()
                .vote(comment_id, target_vote(current, direction))
                .await?;
            let tally = updated.vote_tally();
            for c in self.all_mut().filter(|c| c.id() == comment_id) {
                c.apply_tally(tally);
            }
            Ok(updated)
        }
    }
}
