use std::{collections::HashMap, fs};

use client_core::endpoints;

pub const SETTINGS_FILE: &str = "case_desk.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub pending_path: String,
    pub taken_path: String,
    pub all_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            pending_path: endpoints::PENDING_CASES.into(),
            taken_path: endpoints::MY_TAKEN_CASES.into(),
            all_path: endpoints::ALL_CASES.into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the flat `key = "value"` file, then the environment.
/// A file that does not parse is ignored.
fn settings_from(raw_file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = raw_file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
            if let Some(v) = file_cfg.get("pending_path") {
                settings.pending_path = v.clone();
            }
            if let Some(v) = file_cfg.get("taken_path") {
                settings.taken_path = v.clone();
            }
            if let Some(v) = file_cfg.get("all_path") {
                settings.all_path = v.clone();
            }
        }
    }

    let overrides: [(&str, &str, &mut String); 4] = [
        ("CASE_DESK_SERVER_URL", "APP__SERVER_URL", &mut settings.server_url),
        ("CASE_DESK_PENDING_PATH", "APP__PENDING_PATH", &mut settings.pending_path),
        ("CASE_DESK_TAKEN_PATH", "APP__TAKEN_PATH", &mut settings.taken_path),
        ("CASE_DESK_ALL_PATH", "APP__ALL_PATH", &mut settings.all_path),
    ];
    for (plain, prefixed, slot) in overrides {
        if let Some(v) = env(plain) {
            *slot = v;
        }
        if let Some(v) = env(prefixed) {
            *slot = v;
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_point_at_local_server() {
        let settings = settings_from(None, no_env);

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pending_path, "/pending_cases");
    }

    #[test]
    fn file_values_override_defaults() {
        let raw = r#"
            server_url = "https://cases.example.org"
            all_path = "/staff/all_cases"
        "#;

        let settings = settings_from(Some(raw), no_env);

        assert_eq!(settings.server_url, "https://cases.example.org");
        assert_eq!(settings.all_path, "/staff/all_cases");
        assert_eq!(settings.taken_path, "/my_taken_cases");
    }

    #[test]
    fn unparsable_file_is_ignored() {
        let settings = settings_from(Some("server_url = ["), no_env);

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn prefixed_env_wins_over_plain_env_and_file() {
        let raw = r#"server_url = "http://from-file""#;
        let env = |key: &str| match key {
            "CASE_DESK_SERVER_URL" => Some("http://plain".to_string()),
            "APP__SERVER_URL" => Some("http://prefixed".to_string()),
            "CASE_DESK_TAKEN_PATH" => Some("/taken".to_string()),
            _ => None,
        };

        let settings = settings_from(Some(raw), env);

        assert_eq!(settings.server_url, "http://prefixed");
        assert_eq!(settings.taken_path, "/taken");
    }
}
