mod api;
mod components;
mod env_variable_utils;
mod models;
mod utils;

use crate::components::Dashboard;
use crate::env_variable_utils::{get_app_name, get_backend_url};
use web_sys::console;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Dashboard /> }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(&format!("NAME: \"{}\", API: \"{}\"", get_app_name(), get_backend_url()).into());
}
