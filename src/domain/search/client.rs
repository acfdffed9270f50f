use super::{ResolveObjectResponse, SearchResponse};
use crate::client::LemmyClient;
use crate::error::SdkError;
use crate::shared::{ListingType, SearchType, Sort};

pub struct Search<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Search<'a> {
    pub async fn search(
        &self,
        q: &str,
        kind: SearchType,
        sort: Sort,
        page: u32,
        limit: u32,
    ) -> Result<SearchResponse, SdkError> {
        if !sort.valid_for_search() {
            return Err(SdkError::Validation(format!("{sort} cannot be used for search")));
        }
        let query = vec![
            ("q", q.to_string()),
            ("type_", kind.as_str().to_string()),
            ("sort", sort.post_param()),
            ("listing_type", ListingType::All.as_str().to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        Ok(self.client.http.get("search", query).await?)
    }

    /// Look up a remote object by URL, fetching it into this instance if needed.
    pub async fn resolve(&self, url: &str) -> Result<ResolveObjectResponse, SdkError> {
        let query = vec![("q", url.to_string())];
        Ok(self.client.http.get("resolve_object", query).await?)
    }
}
