//! Environment lookups used by the config structs built at process start.

/// Parse an environment variable, falling back to `default`.
///
/// Unset or blank variables fall back silently. A value that is set but
/// does not parse logs a warning and falls back.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Some(raw) = env_string(var) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}

/// Read a string variable, treating unset and blank values alike.
pub fn env_string(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: each test uses a unique variable name.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: each test uses a unique variable name.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_env_parse_valid_timeout() {
        let var_name = "SALESCRIPT_TEST_TIMEOUT_41127";
        set(var_name, "90");
        let result: u64 = env_parse_with_default(var_name, 60);
        assert_eq!(result, 90);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value_falls_back() {
        let var_name = "SALESCRIPT_TEST_RETRIES_41128";
        set(var_name, "three");
        let result: usize = env_parse_with_default(var_name, 0);
        assert_eq!(result, 0);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "SALESCRIPT_TEST_MISSING_41129";
        unset(var_name);
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_string_trims_and_ignores_blank() {
        let var_name = "SALESCRIPT_TEST_STRING_41130";
        set(var_name, "  gpt-4o-mini ");
        assert_eq!(env_string(var_name).as_deref(), Some("gpt-4o-mini"));
        set(var_name, "   ");
        assert_eq!(env_string(var_name), None);
        unset(var_name);
    }
}
