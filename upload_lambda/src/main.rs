use lambda_runtime::{run, service_fn, tracing, Error};
mod error;
mod event;
mod event_handler;
mod fetch;
use event_handler::function_handler;
use fetch::HttpImageFetcher;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let fetcher = HttpImageFetcher::new(reqwest::Client::new());
    run(service_fn(|event| function_handler(event, &fetcher))).await
}
