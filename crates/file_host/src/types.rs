//! Request/response payloads shared across host file-service contracts and
//! implementations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Digest algorithm accepted by host file-info requests.
pub enum DigestAlgorithm {
    /// MD5 digest.
    #[default]
    Md5,
    /// SHA-1 digest.
    Sha1,
}

impl DigestAlgorithm {
    /// Returns the stable string token used on the host wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of materializing a URL as a session-local temporary file.
pub struct DownloadedFile {
    /// Local temporary path; valid for the current host session only.
    pub temp_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request payload for the host image previewer.
pub struct PreviewImagesRequest {
    /// Image paths available in the previewer.
    pub urls: Vec<String>,
    /// Path shown first; must be one of `urls`.
    pub current: String,
    /// Whether the save-capable overflow menu is requested.
    pub show_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request payload for the host document viewer.
pub struct OpenDocumentRequest {
    /// Local path of the document to open.
    pub file_path: String,
    /// Whether the save-capable overflow menu is requested.
    pub show_menu: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request payload for host file inspection.
pub struct FileInfoRequest {
    /// Local path of the file to inspect.
    pub file_path: String,
    /// Digest to compute; the host omits the digest when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_algorithm: Option<DigestAlgorithm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Info record returned by the host, passed through to callers unmodified.
pub struct FileInfo {
    /// File size in bytes.
    pub size: u64,
    /// Requested digest; absent when no algorithm was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Host-specific fields preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn digest_algorithm_serde_values_match_host_strings() {
        assert_eq!(
            serde_json::to_string(&DigestAlgorithm::Md5).expect("serialize"),
            "\"md5\""
        );
        assert_eq!(
            serde_json::to_string(&DigestAlgorithm::Sha1).expect("serialize"),
            "\"sha1\""
        );
        let algorithm: DigestAlgorithm = serde_json::from_str("\"sha1\"").expect("deserialize");
        assert_eq!(algorithm, DigestAlgorithm::Sha1);
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Md5);
        assert_eq!(DigestAlgorithm::Sha1.as_str(), "sha1");
    }

    #[test]
    fn request_payloads_use_camel_case_field_names() {
        let preview = PreviewImagesRequest {
            urls: vec!["/tmp/a.png".to_string()],
            current: "/tmp/a.png".to_string(),
            show_menu: true,
        };
        let value = serde_json::to_value(&preview).expect("serialize");
        assert_eq!(value["showMenu"], json!(true));
        assert_eq!(value["urls"], json!(["/tmp/a.png"]));

        let request = FileInfoRequest {
            file_path: "/tmp/a.png".to_string(),
            digest_algorithm: None,
        };
        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["filePath"], json!("/tmp/a.png"));
        assert!(value.get("digestAlgorithm").is_none());
    }

    #[test]
    fn file_info_preserves_unknown_host_fields() {
        let raw = json!({
            "size": 1234,
            "digest": "abc",
            "createTime": 1700000000,
        });
        let info: FileInfo = serde_json::from_value(raw.clone()).expect("deserialize");
        assert_eq!(info.size, 1234);
        assert_eq!(info.digest.as_deref(), Some("abc"));
        assert_eq!(info.extra["createTime"], json!(1700000000));
        assert_eq!(serde_json::to_value(&info).expect("serialize"), raw);
    }
}
