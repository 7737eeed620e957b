#[cfg(test)]
mod tests {
    use std::env;

    use crate::config::{self, AppConfig};

    #[test]
    fn default_config_matches_embedded_toml() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.sizer.max_workers, 5);
    }

    #[test]
    fn load_layers_env_over_defaults_and_validates() {
        // Single test for the env-dependent paths so parallel test runs
        // cannot race on the same variable.
        let cfg = config::load().unwrap();
        assert_eq!(cfg.sizer.max_workers, 5);

        env::set_var("SUMMENBAUM__SIZER__MAX_WORKERS", "9");
        let cfg = config::load().unwrap();
        assert_eq!(cfg.sizer.max_workers, 9);

        env::set_var("SUMMENBAUM__SIZER__MAX_WORKERS", "0");
        let err = config::load().unwrap_err();
        assert!(err.to_string().contains("sizer.max_workers"));

        env::remove_var("SUMMENBAUM__SIZER__MAX_WORKERS");
    }
}
