//! Images sub-client: pict-rs upload and delete.
//!
//! pict-rs lives outside `/api/v3` and authenticates with the `jwt` cookie
//! instead of the `auth` query parameter.

use super::{UploadImageResponse, UploadedImage};
use crate::auth::Session;
use crate::client::LemmyClient;
use crate::error::{ApiError, AuthError, SdkError};
use crate::http::client::{decode, read_body};
use crate::http::retry::with_retry;
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};

pub struct Images<'a> {
    pub(crate) client: &'a LemmyClient,
}

fn image_form(bytes: &[u8], filename: &str, mime: &str) -> Result<Form, reqwest::Error> {
    let part = Part::bytes(bytes.to_vec())
        .file_name(filename.to_string())
        .mime_str(mime)?;
    Ok(Form::new().part("images[]", part))
}

fn jwt_cookie(session: &Session) -> Result<String, AuthError> {
    session
        .token()
        .map(|t| format!("jwt={}", t.as_str()))
        .ok_or(AuthError::NotAuthenticated)
}

impl<'a> Images<'a> {
    /// Upload one image. Needs a logged-in session.
    pub async fn upload(
        &self,
        bytes: &[u8],
        filename: &str,
        mime: &str,
    ) -> Result<UploadImageResponse, SdkError> {
        let http = &self.client.http;
        let session = http.session().await;
        let cookie = jwt_cookie(&session)?;
        image_form(bytes, filename, mime)
            .map_err(|e| SdkError::Validation(format!("Invalid image part: {e}")))?;

        let url = session.pictrs_url("");
        let (url, cookie) = (url.as_str(), cookie.as_str());
        let config = http.retry_policy().config();
        let text = with_retry(&config, "pictrs/image", || async move {
            let form = image_form(bytes, filename, mime).map_err(|e| ApiError::from_transport(&e))?;
            tracing::debug!(filename, size = bytes.len(), "pict-rs upload");
            let resp = http
                .raw()
                .post(url)
                .header(COOKIE, cookie)
                .multipart(form)
                .send()
                .await
                .map_err(|e| ApiError::from_transport(&e))?;
            read_body(resp).await
        })
        .await?;

        let resp: UploadImageResponse = decode(text)?;
        if !resp.is_ok() {
            return Err(SdkError::Other(format!("Image upload rejected: {}", resp.msg)));
        }
        Ok(resp)
    }

    /// Public URL of an uploaded file.
    pub async fn url_of(&self, image: &UploadedImage) -> String {
        self.client.http.session().await.pictrs_url(&image.file)
    }

    pub async fn delete(&self, image: &UploadedImage) -> Result<(), SdkError> {
        let http = &self.client.http;
        let session = http.session().await;
        let cookie = jwt_cookie(&session)?;
        let url = session.pictrs_url(&format!(
            "delete/{}/{}",
            urlencoding::encode(&image.delete_token),
            urlencoding::encode(&image.file)
        ));
        let (url, cookie) = (url.as_str(), cookie.as_str());
        let config = http.retry_policy().config();
        with_retry(&config, "pictrs/image/delete", || async move {
            let resp = http
                .raw()
                .get(url)
                .header(COOKIE, cookie)
                .send()
                .await
                .map_err(|e| ApiError::from_transport(&e))?;
            read_body(resp).await
        })
        .await?;
        Ok(())
    }
}
