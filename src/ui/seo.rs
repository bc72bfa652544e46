//! Head tags for search engines and link previews

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::seo::SITE;

/// Title, description, Open Graph/Twitter tags and JSON-LD for the landing page
#[component]
pub fn SeoTags() -> impl IntoView {
    view! {
        <Title text=SITE.title/>

        {SITE.named_tags().into_iter().map(|(name, content)| {
            view! { <Meta name=name content=content/> }
        }).collect_view()}

        {SITE.property_tags().into_iter().map(|(property, content)| {
            view! { <Meta property=property content=content/> }
        }).collect_view()}

        <Link rel="canonical" href=SITE.url/>
        <Link rel="icon" href="/icons/flower.svg"/>

        <script type="application/ld+json" inner_html=SITE.structured_data_script()></script>
    }
}
