#[cfg(test)]
mod tests {
    use dailyrep::api::report_api::{API_URL_ENV, DEFAULT_API_URL, TOKEN_ENV};
    use dailyrep::api::ReportApiConfig;
    use dailyrep::libs::config::{Config, Palette, Rgb8};
    use dailyrep::libs::series::EstimationPolicy;
    use std::sync::Mutex;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Environment variables are process-wide; tests touching them take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temporary home and clears API overrides.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: std::sync::MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(TOKEN_ENV);
            std::env::remove_var(API_URL_ENV);
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }

        fn teardown(self) {
            std::env::remove_var(TOKEN_ENV);
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.api.is_none());
        assert!(config.estimation.is_none());
        assert!(config.palette.is_none());
        assert_eq!(config.estimation_policy(), EstimationPolicy::default());
        assert_eq!(config.palette(), Palette::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        let api = config.api_config();
        assert_eq!(api.api_url, DEFAULT_API_URL);
        assert!(!api.has_token());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ReportApiConfig {
                api_url: "https://reports.example.com".to_string(),
                auth_token: Some("saved-token".to_string()),
                timeout_secs: 10,
            }),
            estimation: Some(EstimationPolicy {
                gmv_per_booking: 900.0,
                gross_per_booking: 700.0,
            }),
            palette: None,
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.estimation_policy().gmv_per_booking, 900.0);
        assert!(read_config.api_config().has_token());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_saved_values(_ctx: &mut ConfigTestContext) {
        Config {
            api: Some(ReportApiConfig {
                api_url: "https://reports.example.com".to_string(),
                auth_token: Some("saved-token".to_string()),
                timeout_secs: 10,
            }),
            ..Default::default()
        }
        .save()
        .unwrap();

        std::env::set_var(TOKEN_ENV, "env-token");
        std::env::set_var(API_URL_ENV, "http://localhost:8080");

        let api = Config::read().unwrap().api_config();
        assert_eq!(api.auth_token.as_deref(), Some("env-token"));
        assert_eq!(api.api_url, "http://localhost:8080");
        assert_eq!(api.timeout_secs, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_token_from_env_only(_ctx: &mut ConfigTestContext) {
        std::env::set_var(TOKEN_ENV, "env-token");
        let api = Config::default().api_config();
        assert!(api.has_token());
        assert_eq!(api.api_url, DEFAULT_API_URL);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_token_not_written_when_absent(_ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ReportApiConfig::default()),
            ..Default::default()
        };
        config.save().unwrap();

        let path = dailyrep::libs::data_storage::DataStorage::new().get_path("config.json").unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(!text.contains("auth_token"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_palette(_ctx: &mut ConfigTestContext) {
        let config: Config = serde_json::from_str(r#"{ "palette": { "bar_fill": [1, 2, 3] } }"#).unwrap();
        let palette = config.palette();
        assert_eq!(palette.bar_fill, Rgb8(1, 2, 3));
        assert_eq!(palette.bar_edge, Palette::default().bar_edge);
        assert_eq!(palette.flow_color(palette.flow.len()), palette.flow[0]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
        Config::delete().unwrap();
    }
}
