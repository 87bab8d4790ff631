//! How the designer gets configured: command-line arguments merged over an
//! optional TOML config file.

pub mod args;
pub mod config;
mod error;

pub use args::{get_args, Args};
pub use config::Config;
pub use error::OptionError;
pub(crate) use error::OptionResult;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::constants::{DEFAULT_CONFIG_FILE_PATH, DEFAULT_CONFIG_TEXT, FILE_EXTENSION};

/// Where the config file lives: an explicit override, or the platform config
/// directory.
pub fn get_config_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        Some(path.to_path_buf())
    } else {
        dirs::config_dir().map(|mut path| {
            path.push(DEFAULT_CONFIG_FILE_PATH);
            path
        })
    }
}

pub fn create_or_get_config(config_path: &Option<PathBuf>) -> OptionResult<Config> {
    if let Some(path) = config_path {
        if let Ok(config_string) = fs::read_to_string(path) {
            // We found a config file!
            Ok(toml_edit::de::from_str(config_string.as_str())?)
        } else {
            // Config file DNE...
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }
            fs::File::create(path)?.write_all(DEFAULT_CONFIG_TEXT.as_bytes())?;
            Ok(Config::default())
        }
    } else {
        // Don't write, the config path was somehow None...
        Ok(Config::default())
    }
}

/// Check a startup script path before the terminal takes over, so mistakes
/// print to stderr instead of a modal dialog.
pub fn validate_startup_file(path: &Path) -> OptionResult<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
        return Err(OptionError::arg(format!(
            "'{}' is not a .{FILE_EXTENSION} designer file.",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(OptionError::arg(format!(
            "'{}' does not exist.",
            path.display()
        )));
    }

    Ok(())
}

/// The effective theme name; argument values win over config values.
pub fn theme_name(args: &Args, config: &Config) -> Option<String> {
    args.general_args
        .theme
        .clone()
        .or_else(|| config.flags.as_ref().and_then(|flags| flags.theme.clone()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn startup_files_must_have_the_designer_extension() {
        let err = validate_startup_file(Path::new("layout.toml")).unwrap_err();
        assert!(err.to_string().contains("designer file"));

        let err = validate_startup_file(Path::new("missing.tui")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn arguments_beat_the_config_theme() {
        let mut args = Args::default();
        let config: Config = toml_edit::de::from_str("[flags]\ntheme = \"default\"").unwrap();
        assert_eq!(theme_name(&args, &config).as_deref(), Some("default"));

        args.general_args.theme = Some("default-light".to_owned());
        assert_eq!(
            theme_name(&args, &config).as_deref(),
            Some("default-light")
        );
    }
}
