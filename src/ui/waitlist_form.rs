//! Waitlist signup form
//!
//! Signups are validated client-side and appended to `localStorage`. A store
//! that cannot be read or written never blocks the signup; the failure is only
//! logged.

use leptos::html::Input;
use leptos::prelude::*;

use crate::core::{Submission, Waitlist, submit};
use crate::ui::clock::now_iso8601;
use crate::ui::common::{FormField, SuccessMessage};
use crate::ui::local_storage::BrowserStorage;

/// Message shown once the signup is recorded
pub const JOINED_MESSAGE: &str = "You're on the list. We'll be in touch.";

/// Submit button label for the given state
pub fn submit_label(joined: bool) -> &'static str {
    if joined { "Joined" } else { "Join the waitlist" }
}

/// Value to submit for a field
///
/// The input element's live value wins over the last `input` event, so
/// autofill and scripted fills that fire no event are still picked up.
pub fn submitted_value(live: Option<String>, typed: String) -> String {
    live.unwrap_or(typed)
}

/// Waitlist form component
#[component]
pub fn WaitlistForm() -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let joined = RwSignal::new(false);
    let name_ref = NodeRef::<Input>::new();
    let email_ref = NodeRef::<Input>::new();

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if joined.get_untracked() {
            return;
        }

        let name_value = submitted_value(
            name_ref.get_untracked().map(|input| input.value()),
            name.get_untracked(),
        );
        let email_value = submitted_value(
            email_ref.get_untracked().map(|input| input.value()),
            email.get_untracked(),
        );

        let waitlist = Waitlist::new(BrowserStorage);
        match submit(&waitlist, &name_value, &email_value, now_iso8601()) {
            Submission::Rejected(err) => {
                email_error.set(Some(err.to_string()));
                if let Some(input) = email_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            Submission::Joined {
                entry,
                persist_error,
            } => {
                email_error.set(None);
                if let Some(err) = persist_error {
                    leptos::logging::warn!("Waitlist entry for {} not saved: {}", entry.email, err);
                }
                joined.set(true);
            }
        }
    };

    view! {
        <form id="waitlist-form" class="waitlist-form" on:submit=on_submit novalidate=true>
            <FormField
                id="name"
                label="Name"
                autocomplete="name"
                placeholder="Your name"
                value=name.into()
                on_input=Callback::new(move |value: String| name.set(value))
                input_ref=name_ref
            />
            <FormField
                id="email"
                label="Email"
                required=true
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email.into()
                on_input=Callback::new(move |value: String| {
                    email.set(value);
                    email_error.set(None);
                })
                input_ref=email_ref
                error=email_error.into()
            />

            <button
                type="submit"
                class="waitlist-submit"
                disabled=move || joined.get()
            >
                {move || submit_label(joined.get())}
            </button>

            <SuccessMessage
                id="form-success"
                message=Signal::derive(move || joined.get().then(|| JOINED_MESSAGE.to_string()))
            />
        </form>
    }
}
