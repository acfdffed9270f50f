//! Image hosting through the instance's pict-rs service.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub file: String,
    pub delete_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadImageResponse {
    /// `"ok"` on success.
    pub msg: String,
    #[serde(default)]
    pub files: Vec<UploadedImage>,
}

impl UploadImageResponse {
    pub fn is_ok(&self) -> bool {
        self.msg == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_decodes() {
        let r: UploadImageResponse = serde_json::from_str(
            r#"{"msg":"ok","files":[{"file":"a1b2.png","delete_token":"tok-1"}]}"#,
        )
        .unwrap();
        assert!(r.is_ok());
        assert_eq!(r.files[0].file, "a1b2.png");

        let failed: UploadImageResponse =
            serde_json::from_str(r#"{"msg":"too large"}"#).unwrap();
        assert!(!failed.is_ok());
        assert!(failed.files.is_empty());
    }
}
