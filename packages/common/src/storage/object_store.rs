use std::collections::HashMap;

use http::HeaderMap;
use http::header::CONTENT_TYPE;
use s3::creds::Credentials;
use s3::{Bucket, Region};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::disposition::attachment_disposition;
use super::error::StorageError;

/// Presigned URLs expire after one hour.
pub const PRESIGN_EXPIRY_SECS: u32 = 3600;

/// Namespace prefix for objects created through the upload workflow.
const UPLOADS_PREFIX: &str = "uploads";

/// Connection settings for the S3-protocol bucket.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

/// Credentials handed to a client for a direct-to-bucket upload.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UploadCredentials {
    /// Time-limited URL the client PUTs the file body to.
    #[schema(example = "https://objects.example.com/portal/uploads/...")]
    pub upload_url: String,
    /// Object key to persist alongside the file record.
    #[schema(example = "uploads/0e4f...-design.png")]
    pub file_key: String,
    /// Direct endpoint/bucket/key concatenation. Only reachable when the
    /// bucket itself is configured for public access.
    pub public_url: String,
}

/// Gateway to the S3-protocol object store.
///
/// File bodies never transit this process: the gateway mints presigned URLs
/// for direct client-to-bucket transfers and performs physical deletes.
#[derive(Clone)]
pub struct ObjectStore {
    bucket: Box<Bucket>,
    endpoint: String,
    bucket_name: String,
}

impl ObjectStore {
    pub fn new(settings: &StorageSettings) -> Result<Self, StorageError> {
        let region = Region::Custom {
            region: "auto".to_owned(),
            endpoint: settings.endpoint.clone(),
        };
        let credentials = Credentials::new(
            Some(&settings.access_key),
            Some(&settings.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Credentials(e.to_string()))?;

        let bucket = Bucket::new(&settings.bucket, region, credentials)
            .map_err(|e| StorageError::Backend(e.to_string()))?
            .with_path_style();

        Ok(Self {
            bucket,
            endpoint: settings.endpoint.trim_end_matches('/').to_owned(),
            bucket_name: settings.bucket.clone(),
        })
    }

    /// Mint a presigned PUT URL for a fresh object key.
    ///
    /// The key prefixes the original filename with a new UUID under the
    /// `uploads/` namespace, so same-named uploads never collide. The URL is
    /// scoped to exactly that key and content type.
    pub async fn presign_upload(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<UploadCredentials, StorageError> {
        let file_key = format!("{UPLOADS_PREFIX}/{}-{filename}", Uuid::new_v4());

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            content_type
                .parse()
                .map_err(|_| StorageError::InvalidContentType(content_type.to_owned()))?,
        );

        let upload_url = self
            .bucket
            .presign_put(&file_key, PRESIGN_EXPIRY_SECS, Some(headers), None)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let public_url = format!("{}/{}/{}", self.endpoint, self.bucket_name, file_key);

        Ok(UploadCredentials {
            upload_url,
            file_key,
            public_url,
        })
    }

    /// Mint a presigned GET URL for `key`.
    ///
    /// The signed response headers force a download disposition (with
    /// `original_filename` when supplied) and a UTF-8 charset for textual
    /// content. Returns `None` on failure; callers leave the field
    /// undecorated instead of failing the request.
    pub async fn presign_download(
        &self,
        key: &str,
        original_filename: Option<&str>,
        expiry_secs: u32,
    ) -> Option<String> {
        let mut queries = HashMap::new();
        queries.insert(
            "response-content-disposition".to_owned(),
            attachment_disposition(original_filename),
        );
        if let Some(content_type) = utf8_content_type(key) {
            queries.insert("response-content-type".to_owned(), content_type);
        }

        match self.bucket.presign_get(key, expiry_secs, Some(queries)).await {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(key, "failed to presign download URL: {err}");
                None
            }
        }
    }

    /// Best-effort physical delete. Never raises; callers decide whether a
    /// `false` return aborts the surrounding operation.
    pub async fn delete_object(&self, key: &str) -> bool {
        match self.bucket.delete_object(key).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(key, "failed to delete object: {err}");
                false
            }
        }
    }
}

/// Response content type forcing UTF-8 for textual/JSON keys, so non-ASCII
/// text (lyrics, blueprints) doesn't render as mojibake.
fn utf8_content_type(key: &str) -> Option<String> {
    let mime = mime_guess::from_path(key).first()?;
    let textual = mime.type_() == mime_guess::mime::TEXT
        || mime.subtype() == mime_guess::mime::JSON
        || mime.suffix() == Some(mime_guess::mime::JSON);
    textual.then(|| format!("{}; charset=utf-8", mime.essence_str()))
}
