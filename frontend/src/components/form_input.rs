use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::FormField;

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub field: FormField,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: String,
    pub error: Option<String>,
    /// Emits `(name, value)` on every keystroke
    pub on_input: Callback<(String, String)>,
}

/// A labelled input followed by its validation message
#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((input.name(), input.value()));
        })
    };

    html! {
        <>
            <div class="field">
                <label>{props.label.to_string()}</label>
                <input
                    type={props.input_type.clone()}
                    name={props.field.name()}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            </div>
            <p>{props.error.clone().unwrap_or_default()}</p>
        </>
    }
}
