use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::settings::{ClientSettings, SETTINGS_ELEMENT_ID};
use crate::ui::{
    AccessibilityPanel, LandingPage, NotFoundPage, provide_accessibility_context,
    provide_analytics_context, provide_performance_context,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Error pages are rendered without the request context and fall back to defaults
    let settings = use_context::<ClientSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="preconnect" href="https://fonts.googleapis.com"/>
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Great+Vibes&family=Inter:wght@300;400;500;600;700&family=Playfair+Display:wght@400;600;700&display=swap"
                />
                <script
                    type="application/json"
                    id=SETTINGS_ELEMENT_ID
                    inner_html=settings.to_script_json()
                ></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Settings embedded by [`shell`]
fn client_settings() -> ClientSettings {
    #[cfg(feature = "hydrate")]
    {
        let embedded = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|element| element.text_content());
        match embedded.as_deref().map(ClientSettings::from_json) {
            Some(Some(settings)) => settings,
            Some(None) => {
                leptos::logging::warn!("Ignoring malformed client settings");
                ClientSettings::default()
            }
            None => ClientSettings::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use_context::<ClientSettings>().unwrap_or_default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let settings = client_settings();

    // Performance reads the accessibility preferences, so order matters
    provide_accessibility_context();
    provide_performance_context(settings.performance_mode);
    provide_analytics_context(&settings);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/roselle.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>

        <AccessibilityPanel/>
    }
}
