use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select(&'static [&'static str]),
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: &'static str,
    #[prop_or_default]
    pub error: Option<String>,
    /// (field name, new value)
    pub on_input: Callback<(&'static str, String)>,
    pub on_blur: Callback<&'static str>,
}

/// Labelled input with an inline error slot underneath.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let name = props.name;
    let id = format!("field-{}", name);
    let class = classes!("form-input", props.error.is_some().then(|| "invalid"));

    let onblur = {
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(name))
    };

    let control = match props.kind {
        FieldKind::TextArea => {
            let on_input = props.on_input.clone();
            html! {
                <textarea
                    id={id.clone()}
                    {name}
                    {class}
                    rows="4"
                    placeholder={props.placeholder}
                    value={props.value.clone()}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        on_input.emit((name, input.value()));
                    })}
                    {onblur}
                />
            }
        }
        FieldKind::Select(options) => {
            let on_input = props.on_input.clone();
            html! {
                <select
                    id={id.clone()}
                    {name}
                    {class}
                    onchange={Callback::from(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        on_input.emit((name, select.value()));
                    })}
                    {onblur}
                >
                    <option value="" selected={props.value.is_empty()}>{"Select a service"}</option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={props.value == *option}>{*option}</option>
                    }) }
                </select>
            }
        }
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                _ => "text",
            };
            let on_input = props.on_input.clone();
            html! {
                <input
                    id={id.clone()}
                    type={input_type}
                    {name}
                    {class}
                    placeholder={props.placeholder}
                    value={props.value.clone()}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_input.emit((name, input.value()));
                    })}
                    {onblur}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>
                {props.label}
                if props.required {
                    <span class="required">{" *"}</span>
                }
            </label>
            {control}
            <span class="error-message">{props.error.clone().unwrap_or_default()}</span>
        </div>
    }
}
