//! Integer arithmetic endpoints exposed through the REST API.

use lambda_runtime::{Error as LambdaError, LambdaEvent};

use gateway_adapter::events::{
    header_param, json_response, path_param, query_param, text_response, ApiGatewayProxyRequest,
    ApiGatewayProxyResponse,
};

/// Sums two integers taken from the query string.
pub async fn add(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let x: i32 = query_param(&event.payload.query_string_parameters, "x")?;
    let y: i32 = query_param(&event.payload.query_string_parameters, "y")?;

    json_response(&(x + y))
}

/// Subtracts two integers taken from the request headers.
pub async fn subtract(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let x: i32 = header_param(&event.payload.headers, "x")?;
    let y: i32 = header_param(&event.payload.headers, "y")?;

    json_response(&(x - y))
}

/// Multiplies two integers taken from the path; responds as plain text.
pub async fn multiply(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let x: i64 = path_param(&event.payload.path_parameters, "x")?;
    let y: i64 = path_param(&event.payload.path_parameters, "y")?;

    Ok(text_response((x * y).to_string()))
}

/// Divides two integers taken from the path.
pub async fn divide(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let x: i64 = path_param(&event.payload.path_parameters, "x")?;
    let y: i64 = path_param(&event.payload.path_parameters, "y")?;
    if y == 0 {
        return Err(LambdaError::from("attempted to divide by zero"));
    }

    // i64::MIN / -1 has no representable quotient.
    let quotient = x
        .checked_div(y)
        .ok_or("the quotient overflowed the integer range")?;

    json_response(&quotient)
}
