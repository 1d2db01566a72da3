use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div role="status" class="spinner">
            <span class="spinner-ring" aria-hidden="true"></span>
            <span class="sr-only">{ "Loading..." }</span>
        </div>
    }
}
