//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.
//!
//! Strings without `${` are returned untouched, bare `$` included. Once a
//! string contains `${`, every `$NAME` in it is expanded as well, so such
//! values must not carry a literal `$`. A variable without a default must be
//! set.

use std::env::VarError;

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let expanded = shellexpand::env_with_context(value, |var| std::env::var(var).map(Some))
        .map_err(|e| lookup_error(field, &e))?;
    Ok(expanded.into_owned())
}

/// Expand an optional field in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value {
        *v = expand_env(v, field)?;
    }
    Ok(())
}

fn lookup_error(field: &str, e: &shellexpand::LookupError<VarError>) -> ConfigError {
    let message = match &e.cause {
        VarError::NotPresent => format!("${{{}}} not set", e.var_name),
        VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", e.var_name),
    };
    ConfigError::EnvVar {
        field: field.to_owned(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_show_id_from_env() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("SC_EXPAND_SHOW_ID", "0xcY7");
        }
        let mut value = Some("${SC_EXPAND_SHOW_ID}".to_owned());
        expand_opt(&mut value, "transform.default_show_id").unwrap();
        assert_eq!(value.as_deref(), Some("0xcY7"));
        unsafe {
            std::env::remove_var("SC_EXPAND_SHOW_ID");
        }
    }

    #[test]
    fn test_embedded_reference() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("SC_EXPAND_HOST", "cdn.example.com");
        }
        let url = expand_env("https://${SC_EXPAND_HOST}/e/", "url").unwrap();
        assert_eq!(url, "https://cdn.example.com/e/");
        unsafe {
            std::env::remove_var("SC_EXPAND_HOST");
        }
    }

    #[test]
    fn test_unset_with_default() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::remove_var("SC_EXPAND_UNSET");
        }
        let value = expand_env("${SC_EXPAND_UNSET:-fallback}", "field").unwrap();
        assert_eq!(value, "fallback");
        assert_eq!(expand_env("${SC_EXPAND_UNSET:-}", "field").unwrap(), "");
    }

    #[test]
    fn test_unset_without_default() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::remove_var("SC_EXPAND_MISSING");
        }
        let err = expand_env("${SC_EXPAND_MISSING}", "transform.default_show_id").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(message.contains("SC_EXPAND_MISSING"));
        assert!(message.contains("transform.default_show_id"));
    }

    #[test]
    fn test_bare_dollar_without_braces_untouched() {
        let value = expand_env("https://example.com/$path", "url").unwrap();
        assert_eq!(value, "https://example.com/$path");
    }

    #[test]
    fn test_bare_dollar_next_to_braces_is_expanded() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("SC_MIXED_HOST", "example.com");
            std::env::remove_var("sc_mixed_tail");
        }
        let err = expand_env("https://${SC_MIXED_HOST}/$sc_mixed_tail", "url").unwrap_err();
        assert!(err.to_string().contains("sc_mixed_tail"));
        unsafe {
            std::env::remove_var("SC_MIXED_HOST");
        }
    }

    #[test]
    fn test_expand_opt_none() {
        let mut value = None;
        expand_opt(&mut value, "render.podcast_url").unwrap();
        assert!(value.is_none());
    }
}
