//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with a real 404
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="HYDROBLT - Page not found" />

        <main class="not-found">
            // Error code
            <h1 class="not-found-code">"404"</h1>

            <h2 class="not-found-title">"Page Not Found"</h2>

            <p class="not-found-copy">
                "The storm passed through here and took this page with it."
            </p>

            <A href="/" attr:class="not-found-home">
                "Go Home"
            </A>
        </main>
    }
}
