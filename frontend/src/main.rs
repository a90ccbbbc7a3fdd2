use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod state;
mod scroll {
    pub mod animation;
    pub mod coordinator;
    pub mod navigation;
    pub mod sections;
}
mod components {
    pub mod contact_form;
    pub mod header;
    pub mod job_posts;
    pub mod services;
}
mod pages {
    pub mod home;
}

use pages::home::Home;


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
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Teslawatt site");
    yew::Renderer::<App>::new().render();
}
