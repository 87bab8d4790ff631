use indoc::indoc;

pub const TICK_RATE_IN_MILLISECONDS: u64 = 200; // We use this as it's a good value to work with.

/// The file extension used for generated designer scripts, without the dot.
pub const FILE_EXTENSION: &str = "tui";

/// The id that the root window always carries.
pub const ROOT_ID: &str = "Window";

/// Properties that are never written to a generated script and never shown in
/// the property panel. `Id` is emitted explicitly right after construction, the
/// rest are computed framework state.
pub const SKIPPED_PROPERTIES: [&str; 4] = ["Frame", "Bounds", "ColorScheme", "HotKeySpecifier"];

/// How long to ignore repeated toolbox activations, so a double-click does not
/// drop two copies of a widget on the surface.
pub const TOOLBOX_DEBOUNCE_MILLISECONDS: u64 = 1000;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "tuiforge/tuiforge.toml";

pub const HINT_TEXT: &str =
    " ^O Open │ ^S Save │ ^A Save As │ ^Q Quit │ Tab Panel │ Enter Action │ Del Delete ";

pub const DEFAULT_CONFIG_TEXT: &str = indoc! {"
    # This is a default config file for tuiforge.  All of the settings are commented
    # out by default; if you wish to change them, uncomment and modify as you see fit.

    [flags]
    # The built-in theme to use. Supported values are \"default\" and \"default-light\".
    #theme = \"default\"

    [styles]
    # Colors accept named values (e.g. \"light blue\") or hex strings (e.g. \"#ffffff\").
    #border_color = \"gray\"
    #selected_color = \"light blue\"
    #text_color = \"white\"
    #hint_color = \"dark gray\"
    #widget_color = \"cyan\"
"};
