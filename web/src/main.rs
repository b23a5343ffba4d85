fn main() {
    ui::core::format::capture_local_offset();
    ui::logging::init();
    dioxus::launch(ui::App);
}
