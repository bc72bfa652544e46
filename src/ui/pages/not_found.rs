//! Not found page component
//!
//! A 404 page for anything other than the landing route.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | Roselle"/>
        <Meta name="robots" content="noindex"/>

        <main class="not-found">
            <div class="not-found-icon">
                <Icon name=icons::FLOWER class="icon-xl"/>
            </div>

            <h1 class="not-found-code script">"404"</h1>
            <h2 class="not-found-title">"This Petal Has Drifted Away"</h2>
            <p class="section-lead">
                "The page you're looking for doesn't exist or has been moved."
            </p>

            <A href="/" attr:class="btn-primary">"Return Home"</A>

            <p class="not-found-footer">"© 2025 Roselle"</p>
        </main>
    }
}
