//! The deployment-configuration file read and rewritten by the fixture.
//!
//! The file is a JSON object carrying at least the `stack-name` and
//! `s3-bucket` keys. Everything else in it belongs to the deployment
//! tooling and must survive a rewrite untouched.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::Error;

pub const STACK_NAME_KEY: &str = "stack-name";
pub const BUCKET_NAME_KEY: &str = "s3-bucket";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub stack_name: String,
    pub s3_bucket: String,
}

/// Reads the stack and bucket names from the deployment config file.
pub fn load(path: &Path) -> Result<DeployConfig, Error> {
    let raw = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&raw)?;

    Ok(DeployConfig {
        stack_name: string_key(&document, STACK_NAME_KEY)?,
        s3_bucket: string_key(&document, BUCKET_NAME_KEY)?,
    })
}

/// Rewrites the stack and bucket keys back to the given defaults.
///
/// Only the two known keys are replaced; any other keys in the file are
/// preserved as-is.
pub fn reset(path: &Path, defaults: &DeployConfig) -> Result<(), Error> {
    let raw = fs::read_to_string(path)?;
    let mut document: Value = serde_json::from_str(&raw)?;
    let object = document
        .as_object_mut()
        .ok_or("deployment config must be a JSON object")?;

    object.insert(
        STACK_NAME_KEY.to_string(),
        Value::String(defaults.stack_name.clone()),
    );
    object.insert(
        BUCKET_NAME_KEY.to_string(),
        Value::String(defaults.s3_bucket.clone()),
    );

    fs::write(path, serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

fn string_key(document: &Value, key: &str) -> Result<String, Error> {
    document
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| format!("deployment config is missing the '{key}' key").into())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("deploy-defaults.json");
        fs::write(&path, contents).expect("config file should be writable");
        path
    }

    #[test]
    fn loads_stack_and_bucket_names() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(
            &dir,
            r#"{"stack-name": "calculator-stack", "s3-bucket": "calculator-artifacts", "region": "eu-west-1"}"#,
        );

        let config = load(&path).expect("config should load");
        assert_eq!(config.stack_name, "calculator-stack");
        assert_eq!(config.s3_bucket, "calculator-artifacts");
    }

    #[test]
    fn load_reports_missing_key() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(&dir, r#"{"stack-name": "calculator-stack"}"#);

        let error = load(&path).expect_err("missing key should fail");
        assert!(error.to_string().contains("'s3-bucket'"));
    }

    #[test]
    fn reset_restores_defaults_and_preserves_other_keys() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(
            &dir,
            r#"{"stack-name": "calculator-stack", "s3-bucket": "calculator-artifacts", "region": "eu-west-1"}"#,
        );

        let defaults = DeployConfig {
            stack_name: "test-serverless-app".to_string(),
            s3_bucket: "test-serverless-app".to_string(),
        };
        reset(&path, &defaults).expect("reset should succeed");

        let rewritten = load(&path).expect("rewritten config should load");
        assert_eq!(rewritten, defaults);

        let document: Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("file should read"))
                .expect("file should stay valid JSON");
        assert_eq!(document["region"], Value::String("eu-west-1".to_string()));
    }

    #[test]
    fn reset_rejects_non_object_document() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_config(&dir, r#"["not", "an", "object"]"#);

        let defaults = DeployConfig {
            stack_name: "a".to_string(),
            s3_bucket: "b".to_string(),
        };
        let error = reset(&path, &defaults).expect_err("non-object should fail");
        assert!(error.to_string().contains("JSON object"));
    }
}
