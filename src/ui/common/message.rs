//! Inline status messages

use leptos::prelude::*;

/// Success message component
/// Rendered hidden until `message` holds text
#[component]
pub fn SuccessMessage(
    /// Element id
    id: &'static str,
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <p
            id=id
            class="success-message"
            role="status"
            hidden=move || message.get().is_none()
        >
            {move || message.get().unwrap_or_default()}
        </p>
    }
}
