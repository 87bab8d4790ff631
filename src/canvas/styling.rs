use tui::style::{Color, Modifier, Style};

use crate::options::{Config, OptionError, OptionResult};

/// The resolved styles the painter draws with.
#[derive(Clone, Debug)]
pub struct CanvasStyles {
    pub border_style: Style,
    pub selected_border_style: Style,
    pub text_style: Style,
    pub selected_style: Style,
    pub hint_style: Style,
    pub widget_style: Style,
    pub disabled_style: Style,
    pub title_style: Style,
}

impl Default for CanvasStyles {
    fn default() -> Self {
        CanvasStyles {
            border_style: Style::default().fg(Color::Gray),
            selected_border_style: Style::default().fg(Color::LightBlue),
            text_style: Style::default().fg(Color::Gray),
            selected_style: Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue),
            hint_style: Style::default().fg(Color::DarkGray),
            widget_style: Style::default().fg(Color::Cyan),
            disabled_style: Style::default().add_modifier(Modifier::DIM),
            title_style: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        }
    }
}

impl CanvasStyles {
    /// Build the styles from the merged theme and config overrides.
    pub fn new(theme: Option<&str>, config: &Config) -> OptionResult<Self> {
        let mut styles = match theme {
            None | Some("default") => CanvasStyles::default(),
            Some("default-light") => CanvasStyles::default_light(),
            Some(other) => {
                return Err(OptionError::config(format!(
                    "'{other}' is an invalid built-in color theme."
                )));
            }
        };

        if let Some(overrides) = &config.styles {
            if let Some(color) = &overrides.border_color {
                styles.border_style = Style::default().fg(str_to_colour(color)?);
            }
            if let Some(color) = &overrides.selected_color {
                let color = str_to_colour(color)?;
                styles.selected_border_style = Style::default().fg(color);
                styles.selected_style = Style::default().fg(Color::Black).bg(color);
            }
            if let Some(color) = &overrides.text_color {
                styles.text_style = Style::default().fg(str_to_colour(color)?);
            }
            if let Some(color) = &overrides.hint_color {
                styles.hint_style = Style::default().fg(str_to_colour(color)?);
            }
            if let Some(color) = &overrides.widget_color {
                styles.widget_style = Style::default().fg(str_to_colour(color)?);
            }
        }

        Ok(styles)
    }

    fn default_light() -> Self {
        CanvasStyles {
            border_style: Style::default().fg(Color::Black),
            selected_border_style: Style::default().fg(Color::Blue),
            text_style: Style::default().fg(Color::Black),
            selected_style: Style::default().fg(Color::White).bg(Color::Blue),
            hint_style: Style::default().fg(Color::DarkGray),
            widget_style: Style::default().fg(Color::Blue),
            disabled_style: Style::default().add_modifier(Modifier::DIM),
            title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Convert a config string to a colour: either a name or a `#rrggbb` hex
/// value.
fn str_to_colour(input: &str) -> OptionResult<Color> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        return convert_hex_to_color(hex).ok_or_else(|| invalid_colour(input));
    }

    let cleaned = input.to_lowercase().replace([' ', '-', '_'], "");
    let colour = match cleaned.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return Err(invalid_colour(input)),
    };

    Ok(colour)
}

fn convert_hex_to_color(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(red, green, blue))
}

fn invalid_colour(input: &str) -> OptionError {
    OptionError::config(format!(
        "'{input}' is an invalid color, it should either be a hex string or a named color."
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::options::config::StylesConfig;

    #[test]
    fn named_and_hex_colours_parse() {
        assert_eq!(str_to_colour("light blue").unwrap(), Color::LightBlue);
        assert_eq!(str_to_colour("Grey").unwrap(), Color::Gray);
        assert_eq!(
            str_to_colour("#00ff7f").unwrap(),
            Color::Rgb(0, 255, 127)
        );
        assert!(str_to_colour("#12345").is_err());
        assert!(str_to_colour("octarine").is_err());
    }

    #[test]
    fn bad_themes_are_config_errors() {
        let config = Config::default();
        assert!(CanvasStyles::new(Some("gruvbox"), &config).is_err());
        assert!(CanvasStyles::new(Some("default-light"), &config).is_ok());
    }

    #[test]
    fn config_overrides_apply() {
        let config = Config {
            flags: None,
            styles: Some(StylesConfig {
                border_color: Some("red".to_owned()),
                ..StylesConfig::default()
            }),
        };

        let styles = CanvasStyles::new(None, &config).unwrap();
        assert_eq!(styles.border_style, Style::default().fg(Color::Red));
    }
}
