use shared::AuthMode;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod browser;
mod components;
mod config;
mod pages;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/signup")]
    Signup,
    #[at("/signin")]
    Signin,
    #[at("/blogs")]
    Blogs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AuthMode> for Route {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Signup => Route::Signup,
            AuthMode::Signin => Route::Signin,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Root => html! { <Redirect<Route> to={Route::Signup} /> },
        Route::Signup => html! { <pages::auth::Auth mode={AuthMode::Signup} /> },
        Route::Signin => html! { <pages::auth::Auth mode={AuthMode::Signin} /> },
        Route::Blogs => html! { <pages::blogs::Blogs /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Signin} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="container">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("blog client starting, api at {}", config::BACKEND_URL);
    yew::Renderer::<App>::new().render();
}
