use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// Body returned by every successful invocation.
pub(crate) const GREETING: &str = "Hello from Lambda!";

/// Upload notification delivered by S3. Only the fields the handler reads
/// are modelled; everything else in the record is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadNotification {
    #[serde(rename = "Records", default)]
    pub records: Vec<UploadRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadRecord {
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct S3Entity {
    pub bucket: Option<S3Bucket>,
    pub object: Option<S3Object>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct S3Bucket {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct S3Object {
    pub key: Option<String>,
}

impl UploadRecord {
    #[cfg(test)]
    pub(crate) fn new(bucket: &str, key: &str) -> Self {
        Self {
            s3: Some(S3Entity {
                bucket: Some(S3Bucket {
                    name: Some(bucket.to_string()),
                }),
                object: Some(S3Object {
                    key: Some(key.to_string()),
                }),
            }),
        }
    }

    /// Returns `(bucket, key)` for the record at `index`, naming the first
    /// missing field otherwise.
    pub(crate) fn location(&self, index: usize) -> Result<(&str, &str), HandlerError> {
        let missing = |field: &'static str| HandlerError::MalformedRecord { index, field };

        let s3 = self.s3.as_ref().ok_or_else(|| missing("s3"))?;
        let bucket = s3
            .bucket
            .as_ref()
            .ok_or_else(|| missing("s3.bucket"))?
            .name
            .as_deref()
            .ok_or_else(|| missing("s3.bucket.name"))?;
        let key = s3
            .object
            .as_ref()
            .ok_or_else(|| missing("s3.object"))?
            .key
            .as_deref()
            .ok_or_else(|| missing("s3.object.key"))?;
        Ok((bucket, key))
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// The body is the greeting encoded as a JSON string literal.
    pub(crate) fn success() -> Self {
        Self {
            status_code: 200,
            body: format!("\"{GREETING}\""),
        }
    }
}
