//! Lineage configuration.
//!
//! Built with `typed-builder`, with an environment overlay for the strict
//! consistency checks.

use typed_builder::TypedBuilder;

/// Environment variable enabling strict mode in [`LineageConfig::from_env`].
pub const STRICT_ENV_VAR: &str = "SCHEMA_LINEAGE_STRICT";

/// Configuration shared by every version of a lineage.
///
/// # Examples
///
/// ```
/// use schema_lineage::config::LineageConfig;
///
/// // Defaults: light checks, format validation on, "version" field
/// let config = LineageConfig::default();
/// assert!(!config.strict);
/// assert!(config.validate_formats);
/// assert_eq!(config.version_field, "version");
///
/// let config = LineageConfig::builder()
///     .strict(true)
///     .version_field("schema_version")
///     .build();
/// assert!(config.strict);
/// assert_eq!(config.version_field, "schema_version");
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct LineageConfig {
    /// Re-validate data at every step of upgrade, merge, count and creation.
    #[builder(default = false)]
    pub strict: bool,

    /// Check `format` keywords in the default schema compiler.
    #[builder(default = true)]
    pub validate_formats: bool,

    /// Top-level field holding `{major, minor}` for the default version stamp.
    #[builder(default = String::from("version"), setter(into))]
    pub version_field: String,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            strict: false,
            validate_formats: true,
            version_field: String::from("version"),
        }
    }
}

impl LineageConfig {
    /// Defaults overlaid with `SCHEMA_LINEAGE_STRICT` from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(STRICT_ENV_VAR) {
            config.strict = parse_flag(&value);
        }
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = LineageConfig::builder()
            .strict(true)
            .validate_formats(false)
            .build();

        assert!(config.strict);
        assert!(!config.validate_formats);
        assert_eq!(config.version_field, "version");
    }

    #[test]
    fn test_config_defaults_match_builder() {
        let built = LineageConfig::builder().build();
        let default = LineageConfig::default();
        assert_eq!(built.strict, default.strict);
        assert_eq!(built.validate_formats, default.validate_formats);
        assert_eq!(built.version_field, default.version_field);
    }

    #[test]
    fn test_from_env_reads_strict_flag() {
        // Only test touching this variable
        unsafe { std::env::set_var(STRICT_ENV_VAR, "yes") };
        assert!(LineageConfig::from_env().strict);

        unsafe { std::env::set_var(STRICT_ENV_VAR, "off") };
        assert!(!LineageConfig::from_env().strict);

        unsafe { std::env::remove_var(STRICT_ENV_VAR) };
        let config = LineageConfig::from_env();
        assert!(!config.strict);
        assert!(config.validate_formats);
        assert_eq!(config.version_field, "version");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
