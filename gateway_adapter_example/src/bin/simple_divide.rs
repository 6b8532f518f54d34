use lambda_runtime::Error;

use gateway_adapter::handler::RestAdapter;
use gateway_adapter_example::simple_calculator;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    lambda_runtime::run(RestAdapter::new(simple_calculator::divide)).await
}
