use shared::TOKEN_KEY;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::stored_token;
use crate::Route;

/// Landing view after a successful sign-in.
#[function_component(Blogs)]
pub fn blogs() -> Html {
    let signed_in = use_memo((), |_| stored_token(TOKEN_KEY).is_some());

    html! {
        <div class="blogs-page">
            <h1>{ "Blogs" }</h1>
            if *signed_in {
                <p class="blogs-status">{ "You're signed in." }</p>
            } else {
                <p class="blogs-status">
                    { "No session found. " }
                    <Link<Route> to={Route::Signin}>{ "Sign in" }</Link<Route>>
                </p>
            }
        </div>
    }
}
