//! Communities sub-client: listing, lookup, follow, block, community bans.

use super::wire::{
    BlockCommunity, BlockCommunityResponse, CommunityRef, CommunityResponse, FollowCommunity,
    GetCommunityResponse, ListCommunitiesResponse,
};
use super::CommunityView;
use crate::client::LemmyClient;
use crate::domain::person::wire::{BanFromCommunity, BanFromCommunityResponse};
use crate::error::SdkError;
use crate::network::DEFAULT_PAGE_LIMIT;
use crate::shared::{CommunityId, ListingType, Sort};

pub struct Communities<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Communities<'a> {
    pub async fn list(
        &self,
        listing: ListingType,
        sort: Sort,
        page: u32,
    ) -> Result<Vec<CommunityView>, SdkError> {
        let query = vec![
            ("type_", listing.as_str().to_string()),
            ("sort", sort.post_param()),
            ("page", page.to_string()),
            ("limit", DEFAULT_PAGE_LIMIT.to_string()),
        ];
        let resp: ListCommunitiesResponse = self.client.http.get("community/list", query).await?;
        Ok(resp.communities)
    }

    pub async fn get(&self, community: &CommunityRef) -> Result<GetCommunityResponse, SdkError> {
        let query = match community {
            CommunityRef::Id(id) => vec![("id", id.to_string())],
            CommunityRef::Name(name) => vec![("name", name.clone())],
        };
        Ok(self.client.http.get("community", query).await?)
    }

    /// Subscribe (`follow = true`) or unsubscribe.
    pub async fn follow(
        &self,
        community_id: CommunityId,
        follow: bool,
    ) -> Result<CommunityView, SdkError> {
        let body = FollowCommunity {
            community_id,
            follow,
        };
        let resp: CommunityResponse = self.client.http.post("community/follow", &body).await?;
        Ok(resp.community_view)
    }

    pub async fn block(
        &self,
        community_id: CommunityId,
        block: bool,
    ) -> Result<BlockCommunityResponse, SdkError> {
        let body = BlockCommunity {
            community_id,
            block,
        };
        Ok(self.client.http.post("community/block", &body).await?)
    }

    /// Ban a person from one community; moderator only.
    pub async fn ban_user(
        &self,
        request: &BanFromCommunity,
    ) -> Result<BanFromCommunityResponse, SdkError> {
        Ok(self.client.http.post("community/ban_user", request).await?)
    }
}
