use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use lambda_runtime::Error as LambdaError;
use query_map::QueryMap;
use serde::Serialize;

pub use aws_lambda_events::apigw::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2httpRequest,
    ApiGatewayV2httpResponse,
};
pub use aws_lambda_events::encodings::Body;

/// Extract a typed parameter from the request path parameters.
///
/// A missing parameter yields the type's default value; a parameter that is
/// present but cannot be converted is an error naming the parameter.
///
/// # Arguments
///
/// * `parameters` - The path parameters of the gateway event.
/// * `name` - The name of the parameter to extract.
pub fn path_param<T>(parameters: &HashMap<String, String>, name: &str) -> Result<T, LambdaError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    match parameters.get(name) {
        Some(raw) => parse_param(raw, name),
        None => Ok(T::default()),
    }
}

/// Extract a typed parameter from the query string parameters.
///
/// Same contract as [`path_param`]: missing yields the default, an
/// unconvertible value is an error.
pub fn query_param<T>(parameters: &QueryMap, name: &str) -> Result<T, LambdaError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    match parameters.first(name) {
        Some(raw) => parse_param(raw, name),
        None => Ok(T::default()),
    }
}

/// Extract a typed parameter from the request headers.
///
/// Same contract as [`path_param`], with one extra failure mode: a header
/// value that is not valid UTF-8 is an error.
pub fn header_param<T>(headers: &HeaderMap, name: &str) -> Result<T, LambdaError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    match headers.get(name) {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| format!("header '{name}' is not valid UTF-8"))?;
            parse_param(raw, name)
        }
        None => Ok(T::default()),
    }
}

fn parse_param<T>(raw: &str, name: &str) -> Result<T, LambdaError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|error| format!("failed to convert parameter '{name}': {error}").into())
}

/// Wrap a serializable payload in the fixed JSON response envelope.
pub fn json_response<T: Serialize>(payload: &T) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let body = serde_json::to_string(payload)?;
    Ok(ApiGatewayProxyResponse {
        status_code: 200,
        headers: content_type_headers("application/json"),
        body: Some(Body::Text(body)),
        ..Default::default()
    })
}

/// Wrap a plain string in the fixed text response envelope.
pub fn text_response(body: impl Into<String>) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: 200,
        headers: content_type_headers("text/plain"),
        body: Some(Body::Text(body.into())),
        ..Default::default()
    }
}

/// JSON response envelope for HTTP API (payload format 2.0) endpoints.
pub fn json_response_v2<T: Serialize>(
    payload: &T,
) -> Result<ApiGatewayV2httpResponse, LambdaError> {
    let body = serde_json::to_string(payload)?;
    Ok(ApiGatewayV2httpResponse {
        status_code: 200,
        headers: content_type_headers("application/json"),
        body: Some(Body::Text(body)),
        ..Default::default()
    })
}

/// Text response envelope for HTTP API (payload format 2.0) endpoints.
pub fn text_response_v2(body: impl Into<String>) -> ApiGatewayV2httpResponse {
    ApiGatewayV2httpResponse {
        status_code: 200,
        headers: content_type_headers("text/plain"),
        body: Some(Body::Text(body.into())),
        ..Default::default()
    }
}

fn content_type_headers(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_param_converts_present_value() {
        let parameters = HashMap::from([("x".to_string(), "41".to_string())]);
        let value: i32 = path_param(&parameters, "x").expect("parameter should convert");
        assert_eq!(value, 41);
    }

    #[test]
    fn path_param_defaults_missing_value() {
        let parameters = HashMap::new();
        let value: i32 = path_param(&parameters, "x").expect("missing parameter should default");
        assert_eq!(value, 0);
    }

    #[test]
    fn path_param_rejects_unconvertible_value() {
        let parameters = HashMap::from([("x".to_string(), "not-a-number".to_string())]);
        let error = path_param::<i32>(&parameters, "x").expect_err("conversion should fail");
        assert!(error.to_string().contains("parameter 'x'"));
    }

    #[test]
    fn query_param_reads_first_value() {
        let parameters: QueryMap = "x=2&y=3".parse().expect("query string should parse");
        let x: i32 = query_param(&parameters, "x").expect("parameter should convert");
        let y: i32 = query_param(&parameters, "y").expect("parameter should convert");
        assert_eq!((x, y), (2, 3));
    }

    #[test]
    fn header_param_converts_present_value() {
        let mut headers = HeaderMap::new();
        headers.insert("x", HeaderValue::from_static("7"));
        let value: i64 = header_param(&headers, "x").expect("parameter should convert");
        assert_eq!(value, 7);
    }

    #[test]
    fn header_param_rejects_non_utf8_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x",
            HeaderValue::from_bytes(&[0xff, 0xfe]).expect("opaque bytes are a legal header value"),
        );
        let error = header_param::<i32>(&headers, "x").expect_err("non-UTF-8 value should fail");
        assert!(error.to_string().contains("header 'x'"));
    }

    #[test]
    fn header_param_defaults_missing_value() {
        let headers = HeaderMap::new();
        let value: String = header_param(&headers, "x").expect("missing parameter should default");
        assert_eq!(value, "");
    }

    #[test]
    fn json_response_sets_envelope_fields() {
        let response = json_response(&7).expect("payload should serialize");
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(response.body, Some(Body::Text("7".to_string())));
    }

    #[test]
    fn text_response_sets_envelope_fields() {
        let response = text_response("forty-two");
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
        assert_eq!(response.body, Some(Body::Text("forty-two".to_string())));
    }

    #[test]
    fn v2_envelopes_match_v1_shape() {
        let json = json_response_v2(&vec![1, 2]).expect("payload should serialize");
        assert_eq!(json.status_code, 200);
        assert_eq!(json.body, Some(Body::Text("[1,2]".to_string())));

        let text = text_response_v2("ok");
        assert_eq!(
            text.headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
    }
}
