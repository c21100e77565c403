use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod catalog;
mod config;
mod contact;
mod hooks {
    pub mod visibility;
}
mod components {
    pub mod animated_section;
    pub mod contact_form;
    pub mod loading_screen;
}
mod pages {
    pub mod landing;
}
#[cfg(test)]
mod test_support;

use components::loading_screen::LoadingScreen;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            // Single page site, unknown paths land on the same content
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <LoadingScreen />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
