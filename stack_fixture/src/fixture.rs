//! The assembled fixture: deploy once, assert, clean up.

use std::path::{Path, PathBuf};

use aws_config::BehaviorVersion;
use aws_sdk_cloudformation::types::StackStatus;

use crate::config::{self, DeployConfig};
use crate::functions::{self, LambdaFunction};
use crate::process;
use crate::stacks;
use crate::storage;
use crate::Error;

/// The stack output carrying the REST API endpoint.
pub const REST_API_URL_OUTPUT: &str = "RestApiURL";
/// The stack output carrying the HTTP API endpoint.
pub const HTTP_API_URL_OUTPUT: &str = "HttpApiURL";

// Value the deployment config keys are restored to after cleanup.
const CONFIG_DEFAULT_NAME: &str = "test-serverless-app";

/// Deploys the sample application stack and exposes handles for assertions.
pub struct StackFixture {
    config_path: PathBuf,
    deploy_config: DeployConfig,
    cloud_formation: aws_sdk_cloudformation::Client,
    s3: aws_sdk_s3::Client,
    lambda: aws_sdk_lambda::Client,
    /// Endpoint prefix of the deployed REST API.
    pub rest_api_url: String,
    /// Endpoint prefix of the deployed HTTP API.
    pub http_api_url: String,
    /// The Lambda functions the stack provisioned.
    pub functions: Vec<LambdaFunction>,
}

impl StackFixture {
    /// Runs the deployment script to completion, then resolves everything
    /// the tests assert on: the config names, the API URLs from the stack
    /// outputs, and the provisioned function list.
    pub async fn deploy(script: &Path, config_path: &Path) -> Result<Self, Error> {
        let script = script
            .to_str()
            .ok_or("deployment script path is not valid UTF-8")?;
        let status = process::run_to_completion("sh", &[script]).await?;
        if !status.success() {
            return Err(format!("deployment script exited with {status}").into());
        }

        let deploy_config = config::load(config_path)?;

        let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let cloud_formation = aws_sdk_cloudformation::Client::new(&shared_config);
        let s3 = aws_sdk_s3::Client::new(&shared_config);
        let lambda = aws_sdk_lambda::Client::new(&shared_config);

        let rest_api_url =
            stacks::output_value(&cloud_formation, &deploy_config.stack_name, REST_API_URL_OUTPUT)
                .await?;
        let http_api_url =
            stacks::output_value(&cloud_formation, &deploy_config.stack_name, HTTP_API_URL_OUTPUT)
                .await?;
        let functions =
            functions::functions_in_stack(&cloud_formation, &deploy_config.stack_name).await?;

        Ok(StackFixture {
            config_path: config_path.to_path_buf(),
            deploy_config,
            cloud_formation,
            s3,
            lambda,
            rest_api_url,
            http_api_url,
            functions,
        })
    }

    pub fn stack_name(&self) -> &str {
        &self.deploy_config.stack_name
    }

    pub fn bucket_name(&self) -> &str {
        &self.deploy_config.s3_bucket
    }

    /// Current status of the deployed stack.
    pub async fn stack_status(&self) -> Result<StackStatus, Error> {
        stacks::stack_status(&self.cloud_formation, &self.deploy_config.stack_name).await
    }

    /// True when the artifact bucket exists.
    pub async fn bucket_exists(&self) -> bool {
        storage::bucket_exists(&self.s3, &self.deploy_config.s3_bucket).await
    }

    /// Invokes one of the stack's functions synchronously.
    pub async fn invoke(&self, function_name: &str, payload: &[u8]) -> Result<Vec<u8>, Error> {
        functions::invoke(&self.lambda, function_name, payload).await
    }

    /// Tears the deployment down and restores the config file defaults.
    ///
    /// Deletion is verified; a stack or bucket that survives cleanup must
    /// be removed manually, and the error says so.
    pub async fn clean_up(self) -> Result<(), Error> {
        stacks::delete_stack(&self.cloud_formation, &self.deploy_config.stack_name).await?;
        if !stacks::is_deleted(&self.cloud_formation, &self.deploy_config.stack_name).await? {
            return Err(format!(
                "the stack '{}' still exists and will have to be deleted manually",
                self.deploy_config.stack_name
            )
            .into());
        }

        storage::delete_bucket(&self.s3, &self.deploy_config.s3_bucket).await?;
        if storage::bucket_exists(&self.s3, &self.deploy_config.s3_bucket).await {
            return Err(format!(
                "the bucket '{}' still exists and will have to be deleted manually",
                self.deploy_config.s3_bucket
            )
            .into());
        }

        config::reset(
            &self.config_path,
            &DeployConfig {
                stack_name: CONFIG_DEFAULT_NAME.to_string(),
                s3_bucket: CONFIG_DEFAULT_NAME.to_string(),
            },
        )
    }
}
