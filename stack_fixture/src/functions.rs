//! Lambda helpers: the functions a stack provisioned, and invocation.

use aws_sdk_cloudformation::Client as CloudFormationClient;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::Client;

use crate::Error;

const LAMBDA_RESOURCE_TYPE: &str = "AWS::Lambda::Function";

/// A Lambda function provisioned by the stack under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaFunction {
    /// The logical resource id within the stack template.
    pub logical_id: String,
    /// The physical function name.
    pub name: String,
}

/// Lists the Lambda functions the named stack provisioned.
pub async fn functions_in_stack(
    client: &CloudFormationClient,
    stack_name: &str,
) -> Result<Vec<LambdaFunction>, Error> {
    let mut functions = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let listed = client
            .list_stack_resources()
            .stack_name(stack_name)
            .set_next_token(next_token.take())
            .send()
            .await?;

        for summary in listed.stack_resource_summaries() {
            if summary.resource_type() != Some(LAMBDA_RESOURCE_TYPE) {
                continue;
            }
            functions.push(LambdaFunction {
                logical_id: summary.logical_resource_id().unwrap_or_default().to_string(),
                name: summary.physical_resource_id().unwrap_or_default().to_string(),
            });
        }

        match listed.next_token() {
            Some(token) => next_token = Some(token.to_string()),
            None => break,
        }
    }

    Ok(functions)
}

/// Invokes a function synchronously and returns the raw response payload.
///
/// A function-level error (an unhandled error inside the handler) is
/// surfaced as an error rather than a payload.
pub async fn invoke(client: &Client, function_name: &str, payload: &[u8]) -> Result<Vec<u8>, Error> {
    let invoked = client
        .invoke()
        .function_name(function_name)
        .payload(Blob::new(payload))
        .send()
        .await?;

    if let Some(error) = invoked.function_error() {
        return Err(format!("function '{function_name}' returned an error: {error}").into());
    }

    Ok(invoked
        .payload()
        .map(|blob| blob.as_ref().to_vec())
        .unwrap_or_default())
}
