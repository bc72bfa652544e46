use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error line shown under a field
#[component]
fn FieldError(error: Option<Signal<Option<String>>>, id: &'static str) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div id=format!("{id}-error") class="field-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

fn has_error(error: Option<Signal<Option<String>>>) -> bool {
    error.and_then(|e| e.get()).is_some()
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Element id; also used to link the label and error line
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Fired once when the field receives focus
    #[prop(optional)]
    on_focus: Option<Callback<()>>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:input-invalid=move || has_error(error)
                aria-invalid=move || has_error(error).to_string()
                aria-describedby=format!("{id}-error")
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| {
                    if let Some(cb) = on_focus {
                        cb.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <FieldError error=error id=id/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    #[prop(optional)]
    on_focus: Option<Callback<()>>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </label>
            <textarea
                id=id
                name=id
                class="input-base textarea"
                class:input-invalid=move || has_error(error)
                aria-invalid=move || has_error(error).to_string()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| {
                    if let Some(cb) = on_focus {
                        cb.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <FieldError error=error id=id/>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Text of the empty first option
    #[prop(default = "Select...")]
    placeholder: &'static str,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </label>
            <select
                id=id
                name=id
                class="select-base"
                class:input-invalid=move || has_error(error)
                aria-invalid=move || has_error(error).to_string()
                prop:value=move || value.get()
                on:change=move |ev| {
                    let val = event_target_value(&ev);
                    on_change.run(val);
                }
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val>{text}</option>
                    }
                }).collect_view()}
            </select>
            <FieldError error=error id=id/>
        </div>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    /// Optional description text below checkbox
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="checkbox-field">
            <input
                id=id
                type="checkbox"
                class="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=move || disabled.get()
            />
            <div>
                <label class="label cursor-pointer" for=id>{label}</label>
                {description.map(|desc| view! {
                    <p class="field-hint">{desc}</p>
                })}
            </div>
        </div>
    }
}

/// Multi-select rendered as toggle chips
#[component]
pub fn ChipGroup(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Option labels in display order
    options: Vec<&'static str>,
    /// Whether an option is currently selected
    is_selected: Callback<&'static str, bool>,
    on_toggle: Callback<&'static str>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <fieldset class="field" aria-describedby=format!("{id}-error")>
            <legend class="label">
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </legend>
            <div class="chip-group" class:input-invalid=move || has_error(error)>
                {options.into_iter().map(|option| {
                    view! {
                        <button
                            type="button"
                            class="chip"
                            class:chip-selected=move || is_selected.run(option)
                            aria-pressed=move || is_selected.run(option).to_string()
                            on:click=move |_| on_toggle.run(option)
                            disabled=move || disabled.get()
                        >
                            {option}
                        </button>
                    }
                }).collect_view()}
            </div>
            <FieldError error=error id=id/>
        </fieldset>
    }
}

/// Five-point scale rendered as a radio group
#[component]
pub fn RatingScale(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Labels for positions 1..=5
    labels: [&'static str; 5],
    /// Selected position, if any
    value: Signal<Option<u8>>,
    on_select: Callback<String>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <fieldset class="field" role="radiogroup" aria-describedby=format!("{id}-error")>
            <legend class="label">
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </legend>
            <div class="rating-scale" class:input-invalid=move || has_error(error)>
                {labels.into_iter().enumerate().map(|(index, text)| {
                    let position = index as u8 + 1;
                    view! {
                        <label class="rating-option" class:rating-selected=move || value.get() == Some(position)>
                            <input
                                type="radio"
                                name=id
                                value=position.to_string()
                                prop:checked=move || value.get() == Some(position)
                                on:change=move |_| on_select.run(position.to_string())
                                disabled=move || disabled.get()
                            />
                            <span>{text}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
            <FieldError error=error id=id/>
        </fieldset>
    }
}
