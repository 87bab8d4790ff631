//! Argument parsing via clap.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "tfg [OPTIONS] [FILE]";

/// The arguments for tuiforge.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,
}

#[derive(clap::Args, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    /// A designer script to open on startup. Must carry the .tui extension.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Sets the location of the config file.
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        value_hint = ValueHint::AnyPath
    )]
    pub config_location: Option<PathBuf>,

    /// Set the color theme. Supported values are "default" and "default-light".
    #[arg(long, value_name = "SCHEME")]
    pub theme: Option<String>,
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn file_is_positional() {
        let args = Args::parse_from(["tfg", "layout.tui"]);
        assert_eq!(
            args.general_args.file,
            Some(PathBuf::from("layout.tui"))
        );
    }
}
