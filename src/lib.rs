//! # Lemmios SDK
//!
//! A Rust client for the Lemmy v3 HTTP API, with the state containers a
//! reader app composes its screens from.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Ids, sorts, feeds, date serde, domain models (always available)
//! 2. **State**: Page cursors, subtree expansion, tri-state votes (always available)
//! 3. **Auth**: Session, JWT, login/registration types
//! 4. **HTTP API**: `LemmyHttp` with a fixed-delay retry policy
//! 5. **High-Level Client**: `LemmyClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lemmios_sdk::prelude::*;
//!
//! let client = LemmyClient::builder()
//!     .instance_url("https://lemmy.ml")
//!     .build()?;
//!
//! let feed = PostFeed::new(FeedSource::Listing(ListingType::All), Sort::Hot);
//! feed.fetch_more(&client).await;
//! for post in feed.posts().await {
//!     println!("{} ({})", post.post.name, post.counts.score);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): entities, wire types, state, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Instance defaults and protocol constants.
pub mod network;

// ── Layer 2: State ───────────────────────────────────────────────────────────

/// Pagination, expansion, and vote state machines.
pub mod state;

// ── Layer 3: Auth ────────────────────────────────────────────────────────────

/// Session and authentication types, login/logout.
pub mod auth;

// ── Layer 4: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `LemmyClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        CommentId, CommunityId, FeedSource, ListingType, PersonId, PostId, SearchType, Sort,
        TopRange,
    };

    // Domain types
    pub use crate::domain::comment::{CommentNode, CommentPath, CommentView};
    pub use crate::domain::community::{CommunityView, SubscribedType};
    pub use crate::domain::image::UploadedImage;
    pub use crate::domain::inbox::{
        CommentReplyView, InboxItem, PersonMentionView, PrivateMessageView,
    };
    pub use crate::domain::moderation::{CommentReportView, ModlogEntry, PostReportView};
    pub use crate::domain::person::{Person, PersonView};
    pub use crate::domain::post::PostView;
    pub use crate::domain::site::GetSiteResponse;

    // Errors
    pub use crate::error::{ApiError, AuthError, SdkError};

    // Network
    pub use crate::network::DEFAULT_INSTANCE_URL;

    // Auth
    pub use crate::auth::{Jwt, Session};

    // State containers
    pub use crate::state::{
        Cursor, CursorState, PageOutcome, SharedCursor, Votable, VoteDirection, VoteTally,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, CommentsClient, CommunitiesClient, ImagesClient, InboxClient, LemmyClient,
        LemmyClientBuilder, ModerationClient, PeopleClient, PostsClient, SearchClient,
        SiteClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::comment::CommentThread;
    #[cfg(feature = "http")]
    pub use crate::domain::post::PostFeed;
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
