// ============================================================================
// FORM FIELDS - Inputs con error bajo el campo
// ============================================================================
// Emiten (nombre, valor) en cada cambio y el nombre en blur.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    #[prop_or("text")]
    pub input_type: &'static str,
    pub value: String,
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub on_change: Callback<(String, String)>,
    pub on_blur: Callback<String>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let name = props.name;

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((name.to_string(), input.value()));
        })
    };
    let onblur = {
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(name.to_string()))
    };

    html! {
        <div class={classes!("form-group", props.error.map(|_| "has-error"))}>
            <label for={name}>{props.label}</label>
            <input
                id={name}
                {name}
                type={props.input_type}
                value={props.value.clone()}
                {oninput}
                {onblur}
            />
            if let Some(error) = props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    /// (valor, texto)
    pub options: Vec<(&'static str, &'static str)>,
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub on_change: Callback<(String, String)>,
    pub on_blur: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let name = props.name;

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((name.to_string(), select.value()));
        })
    };
    let onblur = {
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(name.to_string()))
    };

    html! {
        <div class={classes!("form-group", props.error.map(|_| "has-error"))}>
            <label for={name}>{props.label}</label>
            <select id={name} {name} {onchange} {onblur}>
                <option value="" selected={props.value.is_empty()} disabled=true>{"Select..."}</option>
                { for props.options.iter().map(|(value, text)| html! {
                    <option value={*value} selected={props.value == *value}>{*text}</option>
                }) }
            </select>
            if let Some(error) = props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}

#[function_component(RadioGroup)]
pub fn radio_group(props: &SelectFieldProps) -> Html {
    let name = props.name;

    html! {
        <div class={classes!("form-group", props.error.map(|_| "has-error"))}>
            <span class="radio-label">{props.label}</span>
            <div class="radio-options">
                { for props.options.iter().map(|(value, text)| {
                    let value = *value;
                    let onchange = {
                        let on_change = props.on_change.clone();
                        let on_blur = props.on_blur.clone();
                        Callback::from(move |_: Event| {
                            on_change.emit((name.to_string(), value.to_string()));
                            on_blur.emit(name.to_string());
                        })
                    };
                    html! {
                        <label class="radio-option">
                            <input type="radio" {name} {value} checked={props.value == value} {onchange} />
                            {*text}
                        </label>
                    }
                }) }
            </div>
            if let Some(error) = props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}
