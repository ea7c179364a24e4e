use log::info;
use yew::prelude::*;

mod animation;
mod config;
mod dom;
mod layout;
mod components {
    pub mod faq;
    pub mod journey;
    pub mod site_header;
    pub mod typewriter;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
