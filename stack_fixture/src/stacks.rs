//! CloudFormation helpers: stack status, outputs, and deletion.

use std::time::Duration;

use aws_sdk_cloudformation::error::SdkError;
use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;
use aws_sdk_cloudformation::types::StackStatus;
use aws_sdk_cloudformation::Client;
use tokio::time::sleep;

use crate::Error;

const DELETE_POLL_INTERVAL: Duration = Duration::from_secs(5);
const DELETE_POLL_ATTEMPTS: usize = 60;

/// Returns the current status of the named stack.
pub async fn stack_status(client: &Client, stack_name: &str) -> Result<StackStatus, Error> {
    let described = client
        .describe_stacks()
        .stack_name(stack_name)
        .send()
        .await?;
    let stack = described
        .stacks()
        .first()
        .ok_or_else(|| format!("stack '{stack_name}' was not found"))?;

    stack
        .stack_status()
        .cloned()
        .ok_or_else(|| format!("stack '{stack_name}' reported no status").into())
}

/// Returns the value of a named stack output, e.g. `RestApiURL`.
pub async fn output_value(
    client: &Client,
    stack_name: &str,
    output_key: &str,
) -> Result<String, Error> {
    let described = client
        .describe_stacks()
        .stack_name(stack_name)
        .send()
        .await?;
    let stack = described
        .stacks()
        .first()
        .ok_or_else(|| format!("stack '{stack_name}' was not found"))?;

    stack
        .outputs()
        .iter()
        .find(|output| output.output_key() == Some(output_key))
        .and_then(|output| output.output_value())
        .map(str::to_string)
        .ok_or_else(|| format!("stack '{stack_name}' has no '{output_key}' output").into())
}

/// Requests deletion of the named stack.
pub async fn delete_stack(client: &Client, stack_name: &str) -> Result<(), Error> {
    client.delete_stack().stack_name(stack_name).send().await?;
    Ok(())
}

/// Polls until the stack is gone, for a bounded number of attempts.
///
/// CloudFormation stops resolving the stack name once deletion finishes,
/// so a describe call rejected with the stack-not-found validation error
/// counts as deleted. Any other failure (credentials, throttling, network)
/// propagates: it says nothing about whether the stack is gone.
pub async fn is_deleted(client: &Client, stack_name: &str) -> Result<bool, Error> {
    for _ in 0..DELETE_POLL_ATTEMPTS {
        match client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
        {
            Err(error) if is_stack_missing(&error) => return Ok(true),
            Err(error) => return Err(error.into()),
            Ok(described) => {
                let deleted = described
                    .stacks()
                    .iter()
                    .all(|stack| stack.stack_status() == Some(&StackStatus::DeleteComplete));
                if deleted {
                    return Ok(true);
                }
            }
        }

        sleep(DELETE_POLL_INTERVAL).await;
    }

    Ok(false)
}

fn is_stack_missing(error: &SdkError<DescribeStacksError>) -> bool {
    error.as_service_error().is_some_and(stack_not_found)
}

// An unresolvable stack name surfaces as the unmodelled ValidationError.
fn stack_not_found(error: &DescribeStacksError) -> bool {
    error.meta().code() == Some("ValidationError")
}

#[cfg(test)]
mod tests {
    use aws_sdk_cloudformation::error::ErrorMetadata;

    use super::*;

    #[test]
    fn validation_error_counts_as_missing_stack() {
        let error =
            DescribeStacksError::generic(ErrorMetadata::builder().code("ValidationError").build());
        assert!(stack_not_found(&error));
    }

    #[test]
    fn other_service_errors_do_not_count_as_missing() {
        let error =
            DescribeStacksError::generic(ErrorMetadata::builder().code("Throttling").build());
        assert!(!stack_not_found(&error));
    }
}
