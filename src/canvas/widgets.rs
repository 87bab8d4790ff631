pub mod controls;
pub mod properties_panel;
pub mod status_bar;
pub mod surface;
pub mod toolbox;
