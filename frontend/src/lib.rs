pub mod audio;
pub mod client;
pub mod config;
pub mod pages;
pub mod styles;
pub mod timers;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::slot_machine::SlotMachinePage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <SlotMachinePage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
