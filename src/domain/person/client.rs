//! People sub-client: profiles, blocking, site bans.

use super::wire::{
    BanPerson, BanPersonResponse, BlockPerson, BlockPersonResponse, GetPersonDetailsResponse,
    PersonRef,
};
use crate::client::LemmyClient;
use crate::error::SdkError;
use crate::network::DEFAULT_PAGE_LIMIT;
use crate::shared::{PersonId, Query, Sort};

pub struct People<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> People<'a> {
    /// Profile plus one page of the person's posts and comments.
    pub async fn details(
        &self,
        person: &PersonRef,
        sort: Sort,
        page: u32,
        saved_only: bool,
    ) -> Result<GetPersonDetailsResponse, SdkError> {
        let mut query: Query = match person {
            PersonRef::Id(id) => vec![("person_id", id.to_string())],
            PersonRef::Name(name) => vec![("username", name.clone())],
        };
        query.push(("sort", sort.post_param()));
        query.push(("page", page.to_string()));
        query.push(("limit", DEFAULT_PAGE_LIMIT.to_string()));
        if saved_only {
            query.push(("saved_only", "true".to_string()));
        }
        Ok(self.client.http.get("user", query).await?)
    }

    pub async fn block(
        &self,
        person_id: PersonId,
        block: bool,
    ) -> Result<BlockPersonResponse, SdkError> {
        let body = BlockPerson { person_id, block };
        Ok(self.client.http.post("user/block", &body).await?)
    }

    /// Site-wide ban; admin only.
    pub async fn ban(&self, request: &BanPerson) -> Result<BanPersonResponse, SdkError> {
        Ok(self.client.http.post("user/ban", request).await?)
    }
}
