mod app;
mod components;
mod error;
mod models;
mod pages;
mod services;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
