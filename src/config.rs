use crate::theme::Theme;

/// Name of the optional `window` global a page can set to override [`Config`].
pub const GLOBAL: &str = "themeConfig";

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub storage_key: String,
    pub toggle_id: String,
    pub root_attribute: String,
    /// Styling hook mirrored onto the toggle itself.
    pub control_attribute: String,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: "nexuz.theme".to_owned(),
            toggle_id: "themeToggle".to_owned(),
            root_attribute: "data-theme".to_owned(),
            control_attribute: "data-theme".to_owned(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Copy shown on the toggle. Labels name the theme the click switches *to*.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub to_light: String,
    pub to_dark: String,
    pub prefix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            to_light: "Modo claro".to_owned(),
            to_dark: "Modo oscuro".to_owned(),
            prefix: "Cambiar tema: ".to_owned(),
        }
    }
}

impl Labels {
    pub fn action(&self, active: Theme) -> &str {
        match active.inverse() {
            Theme::Light => &self.to_light,
            Theme::Dark => &self.to_dark,
        }
    }

    pub fn aria(&self, active: Theme) -> String {
        format!("{}{}", self.prefix, self.action(active))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_key, "nexuz.theme");
        assert_eq!(config.toggle_id, "themeToggle");
        assert_eq!(config.root_attribute, "data-theme");
        assert_eq!(config.control_attribute, "data-theme");
        assert_eq!(Config::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json(
            r#"{ "storageKey": "site.theme", "controlAttribute": "data-state", "labels": { "toDark": "Switch to dark" } }"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "site.theme");
        assert_eq!(config.toggle_id, "themeToggle");
        assert_eq!(config.root_attribute, "data-theme");
        assert_eq!(config.control_attribute, "data-state");
        assert_eq!(config.labels.to_dark, "Switch to dark");
        assert_eq!(config.labels.to_light, "Modo claro");
    }

    #[test]
    fn test_malformed() {
        assert!(Config::from_json(r#"{ "storageKey": 3 }"#).is_err());
        assert!(Config::from_json("null").is_err());
    }

    #[test]
    fn test_labels() {
        let labels = Labels::default();
        assert_eq!(labels.action(Theme::Dark), "Modo claro");
        assert_eq!(labels.action(Theme::Light), "Modo oscuro");
        assert_eq!(labels.aria(Theme::Light), "Cambiar tema: Modo oscuro");
    }
}
