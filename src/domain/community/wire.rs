//! Wire types for community requests and responses.

use super::{CommunityModeratorView, CommunityView};
use crate::shared::CommunityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommunitiesResponse {
    pub communities: Vec<CommunityView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommunityResponse {
    pub community_view: CommunityView,
    #[serde(default)]
    pub moderators: Vec<CommunityModeratorView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityResponse {
    pub community_view: CommunityView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowCommunity {
    pub community_id: CommunityId,
    pub follow: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockCommunity {
    pub community_id: CommunityId,
    pub block: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockCommunityResponse {
    pub community_view: CommunityView,
    pub blocked: bool,
}

/// Who to look up in `GET community`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityRef {
    Id(CommunityId),
    /// `name` or `name@instance`.
    Name(String),
}
