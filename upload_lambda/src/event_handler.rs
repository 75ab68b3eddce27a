use lambda_runtime::{tracing, Error, LambdaEvent};

use crate::error::HandlerError;
use crate::event::{HandlerResponse, UploadNotification};
use crate::fetch::{ImageFetcher, PLACEHOLDER_IMAGE_URL};

async fn process_notification(
    notification: &UploadNotification,
    fetcher: &impl ImageFetcher,
) -> Result<HandlerResponse, HandlerError> {
    if notification.records.is_empty() {
        tracing::debug!("No records found in upload notification");
    }
    for (index, record) in notification.records.iter().enumerate() {
        let (bucket, key) = record.location(index)?;
        tracing::info!("Hello World! New object uploaded: {} in bucket: {}", key, bucket);
    }

    match fetcher.fetch(PLACEHOLDER_IMAGE_URL).await {
        Ok(data) => tracing::info!("Downloaded public image of size: {} bytes", data.len()),
        Err(e) => tracing::warn!("Failed to download public image: {}", e),
    }

    Ok(HandlerResponse::success())
}

pub(crate) async fn function_handler(
    event: LambdaEvent<UploadNotification>,
    fetcher: &impl ImageFetcher,
) -> Result<HandlerResponse, Error> {
    let response = process_notification(&event.payload, fetcher).await?;
    Ok(response)
}
