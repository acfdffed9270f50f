use super::GetSiteResponse;
use crate::client::LemmyClient;
use crate::error::SdkError;

pub struct SiteInfo<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> SiteInfo<'a> {
    pub async fn get(&self) -> Result<GetSiteResponse, SdkError> {
        Ok(self.client.http.get("site", Vec::new()).await?)
    }
}
