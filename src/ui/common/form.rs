use leptos::html::Input;
use leptos::prelude::*;

/// Labelled text input with an optional inline error
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional handle to the input element (for focusing)
    #[prop(optional)]
    input_ref: Option<NodeRef<Input>>,
    /// Optional error message; rendered in an element with id `{id}-error`
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let input_ref = input_ref.unwrap_or_else(NodeRef::new);
    let has_error = move || error.is_some_and(|e| e.get().is_some());

    view! {
        <div class="field">
            <label for=id class="field-label">
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="field-input"
                class:invalid=has_error
                autocomplete=autocomplete
                placeholder=placeholder
                required=required
                aria-invalid=move || has_error().to_string()
                node_ref=input_ref
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {error.map(|error| view! {
                <p id=format!("{id}-error") class="field-error" role="alert">
                    {move || error.get().unwrap_or_default()}
                </p>
            })}
        </div>
    }
}
