use lambda_runtime::Error;

use gateway_adapter::handler::HttpApiAdapter;
use gateway_adapter_example::complex_calculator;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    lambda_runtime::run(HttpApiAdapter::new(complex_calculator::add)).await
}
