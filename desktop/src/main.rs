#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
fn main() {
    ui::core::format::capture_local_offset();
    ui::logging::init();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Text Analysis Tool – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1100.0, 820.0)),
            ),
        )
        .launch(ui::App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    ui::core::format::capture_local_offset();
    ui::logging::init();
    LaunchBuilder::server().launch(ui::App);
}
