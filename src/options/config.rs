use serde::Deserialize;

/// The parsed config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub flags: Option<ConfigFlags>,
    pub styles: Option<StylesConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigFlags {
    /// The built-in theme to use.
    pub theme: Option<String>,
}

/// Color overrides for the designer chrome. Values accept named colors or
/// hex strings.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StylesConfig {
    pub border_color: Option<String>,
    pub selected_color: Option<String>,
    pub text_color: Option<String>,
    pub hint_color: Option<String>,
    pub widget_color: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: Config = toml_edit::de::from_str(
            r##"
            [flags]
            theme = "default-light"

            [styles]
            border_color = "gray"
            selected_color = "#00ffff"
        "##,
        )
        .unwrap();

        assert_eq!(
            config.flags.unwrap().theme.as_deref(),
            Some("default-light")
        );
        let styles = config.styles.unwrap();
        assert_eq!(styles.border_color.as_deref(), Some("gray"));
        assert_eq!(styles.selected_color.as_deref(), Some("#00ffff"));
        assert_eq!(styles.text_color, None);
    }

    #[test]
    fn an_empty_config_is_fine() {
        let config: Config = toml_edit::de::from_str("").unwrap();
        assert!(config.flags.is_none());
        assert!(config.styles.is_none());
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(toml_edit::de::from_str::<Config>("[flags]\ntheme = 3").is_err());
    }
}
