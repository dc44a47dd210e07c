use log::Level;
use web_sys::HtmlElement;

const DEFAULT_DOCUMENTATION: &str = "doc/grit_documentation.pdf";

/// Runtime settings, read from the `data-*` attributes of the page's `<body>`.
///
/// ```html
/// <body data-api-base="/grit/" data-log-level="debug">
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix placed before every REST path. Empty means paths are relative to the page.
    pub api_base: String,

    pub log_level: Level,

    /// Location of the user documentation opened by the help button.
    pub documentation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            documentation: DEFAULT_DOCUMENTATION.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from the dataset of `body`. Missing keys keep their defaults.
    pub fn from_body(body: &HtmlElement) -> Self {
        let dataset = body.dataset();

        Self::from_pairs(
            ["apiBase", "logLevel", "documentation"]
                .into_iter()
                .filter_map(|key| dataset.get(key).map(|value| (key, value))),
        )
    }

    /// Build a configuration from `(key, value)` pairs, using the camel cased dataset keys.
    /// Unknown keys and unparsable values are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut config = Self::default();

        for (key, value) in pairs {
            let value = value.trim();

            match key {
                "apiBase" => config.api_base = normalise_base(value),
                "logLevel" => {
                    if let Ok(level) = value.parse() {
                        config.log_level = level;
                    }
                }
                "documentation" if !value.is_empty() => config.documentation = value.to_string(),
                _ => {}
            }
        }

        config
    }

    /// Join `path` onto the configured base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// A non-empty base always ends in `/` so paths can be appended directly.
fn normalise_base(base: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative() {
        let config = Config::from_pairs([]);

        assert_eq!(config, Config::default());
        assert_eq!(config.url("course/list"), "course/list");
        assert_eq!(config.documentation, "doc/grit_documentation.pdf");
    }

    #[test]
    fn base_gets_trailing_slash() {
        let config = Config::from_pairs([("apiBase", "/grit".to_string())]);
        assert_eq!(config.url("course/list"), "/grit/course/list");

        let config = Config::from_pairs([("apiBase", "http://host:8080/".to_string())]);
        assert_eq!(config.url("xml/read"), "http://host:8080/xml/read");
    }

    #[test]
    fn bad_level_is_ignored() {
        let config = Config::from_pairs([
            ("logLevel", "chatty".to_string()),
            ("documentation", "  ".to_string()),
            ("colour", "blue".to_string()),
        ]);

        assert_eq!(config.log_level, Level::Info);
        assert_eq!(config.documentation, DEFAULT_DOCUMENTATION);

        let config = Config::from_pairs([("logLevel", "debug".to_string())]);
        assert_eq!(config.log_level, Level::Debug);
    }
}
