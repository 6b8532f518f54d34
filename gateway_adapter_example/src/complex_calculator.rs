//! Complex-number endpoints exposed through the HTTP API (payload
//! format 2.0). Operands arrive as the raw request body in the form
//! `"a,b;c,d"`: two comma-separated complex numbers split by a semicolon.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::{Deserialize, Serialize};

use gateway_adapter::events::{json_response_v2, ApiGatewayV2httpRequest, ApiGatewayV2httpResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexNumber {
    pub real: i64,
    pub imaginary: i64,
}

/// Adds the two complex numbers in the request body.
pub async fn add(
    event: LambdaEvent<ApiGatewayV2httpRequest>,
) -> Result<ApiGatewayV2httpResponse, LambdaError> {
    let body = event.payload.body.unwrap_or_default();
    let (first, second) = parse_operands(&body)?;

    json_response_v2(&ComplexNumber {
        real: first.real + second.real,
        imaginary: first.imaginary + second.imaginary,
    })
}

/// Subtracts the second complex number in the request body from the first.
pub async fn subtract(
    event: LambdaEvent<ApiGatewayV2httpRequest>,
) -> Result<ApiGatewayV2httpResponse, LambdaError> {
    let body = event.payload.body.unwrap_or_default();
    let (first, second) = parse_operands(&body)?;

    json_response_v2(&ComplexNumber {
        real: first.real - second.real,
        imaginary: first.imaginary - second.imaginary,
    })
}

fn parse_operands(body: &str) -> Result<(ComplexNumber, ComplexNumber), LambdaError> {
    let (first, second) = body
        .split_once(';')
        .ok_or("expected two complex numbers separated by ';'")?;

    Ok((parse_complex(first)?, parse_complex(second)?))
}

fn parse_complex(raw: &str) -> Result<ComplexNumber, LambdaError> {
    let (real, imaginary) = raw
        .split_once(',')
        .ok_or_else(|| format!("'{raw}' is not a complex number; expected 'real,imaginary'"))?;

    Ok(ComplexNumber {
        real: parse_part(real)?,
        imaginary: parse_part(imaginary)?,
    })
}

fn parse_part(raw: &str) -> Result<i64, LambdaError> {
    raw.trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", raw.trim()).into())
}
