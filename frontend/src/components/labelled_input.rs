use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LabelledInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

/// Controlled input: shows `value` and reports edits through `onchange` only.
#[function_component(LabelledInput)]
pub fn labelled_input(props: &LabelledInputProps) -> Html {
    let on_input = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                onchange.emit(input.value());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()} class="field-label">{ &*props.label }</label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                class="field-input"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
                required=true
            />
        </div>
    }
}
