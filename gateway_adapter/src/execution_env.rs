use std::env;

/// The environment variable used for telemetry attribution.
pub const EXECUTION_ENV_VAR: &str = "AWS_EXECUTION_ENV";

const PACKAGE_TAG: &str = "gateway-adapter";

/// The marker this package appends to the execution environment.
pub fn execution_env_tag() -> String {
    format!("{PACKAGE_TAG}_{}", env!("CARGO_PKG_VERSION"))
}

/// Append the package marker to `AWS_EXECUTION_ENV`.
///
/// An existing value is kept and separated from the marker with an
/// underscore. The operation is idempotent: if the marker is already
/// present the variable is left untouched.
pub fn tag_execution_environment() {
    let tag = execution_env_tag();
    if let Some(value) = append_tag(env::var(EXECUTION_ENV_VAR).ok().as_deref(), &tag) {
        env::set_var(EXECUTION_ENV_VAR, value);
    }
}

fn append_tag(existing: Option<&str>, tag: &str) -> Option<String> {
    match existing {
        Some(value) if value.contains(tag) => None,
        Some(value) if !value.is_empty() => Some(format!("{value}_{tag}")),
        _ => Some(tag.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_marker_when_variable_is_unset() {
        assert_eq!(append_tag(None, "pkg_1.0"), Some("pkg_1.0".to_string()));
    }

    #[test]
    fn sets_marker_when_variable_is_empty() {
        assert_eq!(append_tag(Some(""), "pkg_1.0"), Some("pkg_1.0".to_string()));
    }

    #[test]
    fn appends_marker_after_existing_value() {
        assert_eq!(
            append_tag(Some("AWS_Lambda_rust"), "pkg_1.0"),
            Some("AWS_Lambda_rust_pkg_1.0".to_string())
        );
    }

    #[test]
    fn leaves_already_tagged_value_untouched() {
        assert_eq!(append_tag(Some("AWS_Lambda_rust_pkg_1.0"), "pkg_1.0"), None);
    }

    #[test]
    fn tag_carries_package_version() {
        assert_eq!(
            execution_env_tag(),
            format!("gateway-adapter_{}", env!("CARGO_PKG_VERSION"))
        );
    }
}
