//! Shared UI crate for TextLens: the analysis engine, its Dioxus views and
//! the platform glue used by the web and desktop launchers.

pub mod core;
pub mod i18n;
pub mod logging;
pub mod results;
pub mod views;
pub mod workflow;

mod app;
pub use app::{App, THEME_CSS};

pub mod components {
    // Title, tabs and language picker (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod theme_switch;
    pub use theme_switch::ThemeSwitch;
}
