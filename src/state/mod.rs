//! State containers every list or detail screen composes against.
//!
//! The app owns instances of these types; the SDK provides the transitions.

pub mod cursor;
pub mod subtree;
pub mod vote;

pub use cursor::{Cursor, CursorState, PageOutcome, PageTicket, SharedCursor};
pub use subtree::{SubtreeCursors, SubtreeState, SubtreeTicket};
pub use vote::{target_vote, vote, Votable, VoteDirection, VoteTally};
