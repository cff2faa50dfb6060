use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement};
use yew::prelude::*;

/// One `<option>`: `value` is what the change callback reports, `label` is
/// what the user sees. Keeping them separate lets callers key selection by
/// id even when labels collide.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            label: label.into(),
        }
    }

    /// For lists where the visible label is also the value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        SelectOption {
            label: value.clone(),
            value,
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct SelectProps {
    #[prop_or_default]
    pub id: String,
    #[prop_or_default]
    pub name: String,
    #[prop_or_default]
    pub class: String,
    pub options: Vec<SelectOption>,
    /// Compared against option values, not labels.
    #[prop_or_default]
    pub selected: Option<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let on_change = {
        let on_change_cb = props.on_change.clone();
        Callback::from(move |event: Event| {
            let target: EventTarget = event.target().expect("Fail to cast to EventTarget");
            let select_element = target.unchecked_into::<HtmlInputElement>();
            on_change_cb.emit(select_element.value());
        })
    };

    let placeholder_html = props.placeholder.as_ref().map(|placeholder| {
        html! {
            <option value="" selected={props.selected.is_none()} disabled=true>
                {placeholder}
            </option>
        }
    });

    let options_html = props.options.iter().map(|option| {
        let is_selected = Some(&option.value) == props.selected.as_ref();
        html! {
            <option value={option.value.clone()} selected={is_selected}>
                {&option.label}
            </option>
        }
    });

    html! {
        <select
            id={props.id.clone()}
            name={props.name.clone()}
            class={if props.class.is_empty() {
                "form-select".to_string()
            } else {
                props.class.clone()
            }}
            onchange={on_change}>
            { for placeholder_html }
            { for options_html }
        </select>
    }
}
