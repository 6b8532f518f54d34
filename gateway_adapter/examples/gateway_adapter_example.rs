/// Examples

use lambda_runtime::{Error as LambdaError, LambdaEvent};

use gateway_adapter::events::{
    json_response, query_param, ApiGatewayProxyRequest, ApiGatewayProxyResponse,
};
use gateway_adapter::handler::RestAdapter;


async fn handle_sum(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let x: i32 = query_param(&event.payload.query_string_parameters, "x")?;
    let y: i32 = query_param(&event.payload.query_string_parameters, "y")?;
    json_response(&(x + y))
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    lambda_runtime::run(RestAdapter::new(handle_sum)).await
}
