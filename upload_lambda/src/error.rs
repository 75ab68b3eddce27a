use reqwest::StatusCode;

/// Errors that abort an invocation and are reported to the Lambda runtime.
#[derive(thiserror::Error, Debug)]
pub(crate) enum HandlerError {
    #[error("record {index} is missing field `{field}`")]
    MalformedRecord { index: usize, field: &'static str },
}

/// Failure to download the public image. Never fatal to the invocation.
#[derive(thiserror::Error, Debug)]
pub(crate) enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}
