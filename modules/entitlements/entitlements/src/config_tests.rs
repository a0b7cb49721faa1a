//! Tests for configuration parsing and loading.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use entitlements_sdk::{Feature, Tier};

    use crate::config::{ConfigError, ENV_PREFIX, EntitlementsConfig};

    const LIMITS_VAR: &str = "FINBOARD_ENTITLEMENTS__ADMIN_BYPASSES_LIMITS";

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = EntitlementsConfig::default();
        assert!(config.admin_bypasses_features);
        assert!(!config.admin_bypasses_limits);
        assert!(config.builtin_modules);
        assert!(config.modules.is_empty());
        assert!(config.disabled_modules.is_empty());
    }

    #[test]
    fn test_env_var_name_matches_prefix() {
        assert!(LIMITS_VAR.starts_with(ENV_PREFIX));
    }

    #[test]
    fn test_config_parse_modules() {
        let yaml = r#"
admin_bypasses_limits: true
modules:
  - key: "forecast"
    name: "Cash Flow Forecast"
    route: "/forecast"
    tier_access: ["growth", "wealth"]
    required_features: ["recurring_detection"]
    dependencies: ["income", "expenses"]
  - key: "legacy"
    name: "Legacy Import"
    route: "/import"
    enabled: false
    tier_access: ["starter"]
disabled_modules: ["investments"]
"#;
        let config: EntitlementsConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(config.admin_bypasses_features); // default
        assert!(config.admin_bypasses_limits);
        assert_eq!(config.modules.len(), 2);

        let forecast = &config.modules[0];
        assert!(forecast.enabled); // default
        assert_eq!(forecast.tier_access, vec![Tier::Growth, Tier::Wealth]);
        assert_eq!(
            forecast.required_features,
            vec![Feature::RecurringDetection]
        );
        assert_eq!(forecast.dependencies, vec!["income", "expenses"]);
        assert!(forecast.description.is_empty());

        assert!(!config.modules[1].enabled);
        assert_eq!(config.disabled_modules, vec!["investments"]);
    }

    #[test]
    fn test_config_reject_unknown_fields() {
        let yaml = r#"
admin_bypasses_features: false
admin_bypass_everything: true
"#;
        let result: Result<EntitlementsConfig, _> = serde_saphyr::from_str(yaml);
        assert!(
            result.is_err(),
            "Config should reject unknown fields due to deny_unknown_fields"
        );
    }

    #[test]
    fn test_config_reject_unknown_module_fields() {
        let yaml = r#"
modules:
  - key: "x"
    name: "X"
    route: "/x"
    tier_access: ["starter"]
    min_tier: "growth"
"#;
        let result: Result<EntitlementsConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_reject_unknown_tier_and_feature() {
        let bad_tier = r#"
modules:
  - key: "x"
    name: "X"
    route: "/x"
    tier_access: ["platinum"]
"#;
        let bad_feature = r#"
modules:
  - key: "x"
    name: "X"
    route: "/x"
    tier_access: ["starter"]
    required_features: ["crypto_trading"]
"#;
        assert!(serde_saphyr::from_str::<EntitlementsConfig>(bad_tier).is_err());
        assert!(serde_saphyr::from_str::<EntitlementsConfig>(bad_feature).is_err());
    }

    #[test]
    fn test_config_tier_names_ignore_case() {
        let yaml = r#"
modules:
  - key: "forecast"
    name: "Forecast"
    route: "/forecast"
    tier_access: ["Growth", "WEALTH"]
"#;
        let config: EntitlementsConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(
            config.modules[0].tier_access,
            vec![Tier::Growth, Tier::Wealth]
        );
    }

    #[test]
    fn test_validate_rejects_empty_tier_access() {
        let yaml = r#"
modules:
  - key: "hidden"
    name: "Hidden"
    route: "/hidden"
    tier_access: []
"#;
        let config: EntitlementsConfig = serde_saphyr::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidModule { ref key, .. } if key == "hidden"));
        assert!(err.to_string().contains("tier_access"));
    }

    #[test]
    fn test_validate_rejects_blank_key_and_route() {
        let blank_key = r#"
modules:
  - key: "  "
    name: "Nameless"
    route: "/nameless"
    tier_access: ["starter"]
"#;
        let blank_route = r#"
modules:
  - key: "rootless"
    name: "Rootless"
    route: ""
    tier_access: ["starter"]
"#;
        let config: EntitlementsConfig = serde_saphyr::from_str(blank_key).unwrap();
        assert!(config.validate().unwrap_err().to_string().contains("key"));

        let config: EntitlementsConfig = serde_saphyr::from_str(blank_route).unwrap();
        assert!(config.validate().unwrap_err().to_string().contains("route"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        temp_env::with_var_unset(LIMITS_VAR, || {
            let config = EntitlementsConfig::load(None).unwrap();
            assert_eq!(config, EntitlementsConfig::default());
        });
    }

    #[test]
    fn test_load_missing_file() {
        let result = EntitlementsConfig::load(Some(Path::new("/nonexistent/entitlements.yaml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_yaml(
            r#"
builtin_modules: false
modules:
  - key: "expenses"
    name: "Expenses"
    route: "/expenses"
    tier_access: ["starter", "growth", "wealth"]
"#,
        );

        temp_env::with_var_unset(LIMITS_VAR, || {
            let config = EntitlementsConfig::load(Some(file.path())).unwrap();
            assert!(!config.builtin_modules);
            assert!(config.admin_bypasses_features);
            assert_eq!(config.modules.len(), 1);
            assert_eq!(config.modules[0].key, "expenses");
        });
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_yaml("admin_bypasses_limits: false\n");

        temp_env::with_var(LIMITS_VAR, Some("true"), || {
            let config = EntitlementsConfig::load(Some(file.path())).unwrap();
            assert!(config.admin_bypasses_limits);
        });
    }

    #[test]
    fn test_load_validates_modules() {
        let file = write_yaml(
            r#"
modules:
  - key: ""
    name: "Empty"
    route: "/empty"
    tier_access: ["starter"]
"#,
        );

        temp_env::with_var_unset(LIMITS_VAR, || {
            let result = EntitlementsConfig::load(Some(file.path()));
            assert!(matches!(result, Err(ConfigError::InvalidModule { .. })));
        });
    }

    #[test]
    fn test_load_reports_extract_errors() {
        let file = write_yaml("builtin_modules: \"sometimes\"\n");

        temp_env::with_var_unset(LIMITS_VAR, || {
            let result = EntitlementsConfig::load(Some(file.path()));
            assert!(matches!(result, Err(ConfigError::Extract(_))));
        });
    }
}
