use std::cell::RefCell;
use std::rc::Rc;

use shared::{AuthFields, AuthForm, AuthMode, Field};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::browser::{BrowserAlerts, BrowserStorage, RouterNavigate};
use crate::components::{LabelledInput, Spinner};
use crate::config::BACKEND_URL;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AuthProps {
    pub mode: AuthMode,
}

// Applies `f` to a copy of the form, then stores the copy back.
fn update<R>(form: &Rc<RefCell<AuthForm>>, f: impl FnOnce(&mut AuthForm) -> R) -> R {
    let mut next = form.borrow().clone();
    let out = f(&mut next);
    *form.borrow_mut() = next;
    out
}

#[function_component(Auth)]
pub fn auth(props: &AuthProps) -> Html {
    let mode = props.mode;
    let form = use_mut_ref(AuthForm::new);
    let redraw = use_force_update();
    let navigator = use_navigator();
    let submit_ref = use_node_ref();

    let on_edit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |(field, value): (Field, String)| {
            form.borrow_mut().edit(field, value);
            redraw.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let submit_ref = submit_ref.clone();

        Callback::from(move |_: MouseEvent| {
            let request = update(&form, |f| f.submit(mode, BACKEND_URL, &BrowserAlerts));
            redraw.force_update();

            if let Some(request) = request {
                let form = form.clone();
                let redraw = redraw.clone();
                let navigator = navigator.clone();

                spawn_local(async move {
                    let result = api::authenticate(&request).await;
                    update(&form, |f| {
                        f.finish(
                            result,
                            &BrowserStorage,
                            &BrowserAlerts,
                            &RouterNavigate(navigator),
                        )
                    });
                    redraw.force_update();
                });
            }

            if let Some(button) = submit_ref.cast::<HtmlElement>() {
                let _ = button.blur();
            }
        })
    };

    let fields = form.borrow().fields().clone();
    let submitting = form.borrow().is_submitting();

    html! {
        <AuthView
            {mode}
            {fields}
            {submitting}
            {on_edit}
            {on_submit}
            {submit_ref}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthViewProps {
    pub mode: AuthMode,
    pub fields: AuthFields,
    pub submitting: bool,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<MouseEvent>,
    #[prop_or_default]
    pub submit_ref: NodeRef,
}

#[function_component(AuthView)]
pub fn auth_view(props: &AuthViewProps) -> Html {
    let mode = props.mode;
    let other = mode.other();

    html! {
        <div class="auth-page">
            if props.submitting {
                <div class="auth-loading">
                    <Spinner />
                </div>
            }
            <div class="auth-card">
                <div class="auth-header">
                    <h1 class="auth-title">{ mode.heading() }</h1>
                    <p class="auth-prompt">
                        { mode.prompt() }
                        <Link<Route> classes={classes!("auth-switch")} to={Route::from(other)}>
                            { other.action_label() }
                        </Link<Route>>
                    </p>
                    if mode.shows_note() {
                        <p class="auth-note">
                            { "Sign up with a random email." }
                            <br />
                            { "No Two-Factor Authentication." }
                        </p>
                    }
                </div>
                <div class="auth-fields">
                    { for Field::visible_in(mode).iter().map(|&field| {
                        let on_edit = props.on_edit.reform(move |value: String| (field, value));
                        html! {
                            <LabelledInput
                                key={field.id()}
                                id={field.id()}
                                label={field.label()}
                                placeholder={field.placeholder()}
                                value={props.fields.get(field).to_string()}
                                onchange={on_edit}
                                input_type={field.input_type()}
                            />
                        }
                    })}
                    <button
                        ref={props.submit_ref.clone()}
                        type="button"
                        class="btn btn-primary auth-submit"
                        onclick={props.on_submit.clone()}
                        disabled={props.submitting}
                    >
                        { mode.action_label() }
                    </button>
                </div>
            </div>
        </div>
    }
}
