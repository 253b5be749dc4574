mod api;
mod app;
mod components;
mod config;
mod format;
mod kpi;
mod pages;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
