//! Search and social metadata for the landing page

use serde_json::{Value, json};

use crate::core::content::{CONTACT_EMAIL, CONTACT_PHONE};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub image: &'static str,
    pub url: &'static str,
    pub page_type: &'static str,
    pub theme_color: &'static str,
}

pub const SITE: SiteMetadata = SiteMetadata {
    title: "Roselle - Blooming Your World With Love | Luxury Floral Lifestyle Brand",
    description: "Discover Roselle, where love, beauty, and nature meet. Premium floral designs, wedding decor, and personalized mirror art crafted to bring elegance into your everyday world.",
    keywords: "luxury floral design, wedding decor, personalized mirrors, premium lifestyle, elegant home decor, floral arrangements, romantic design, luxury brand, artisan crafted, bespoke floral art",
    image: "/og-image.jpg",
    url: "https://roselle.com",
    page_type: "website",
    theme_color: "#e86b6b",
};

pub const SOCIAL_PROFILES: [&str; 3] = [
    "https://instagram.com/roselle",
    "https://facebook.com/roselle",
    "https://twitter.com/roselle",
];

impl SiteMetadata {
    /// `(name, content)` pairs for `<meta name=...>`
    pub fn named_tags(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("title", self.title),
            ("description", self.description),
            ("keywords", self.keywords),
            ("robots", "index, follow"),
            ("language", "English"),
            ("author", "Roselle"),
            ("theme-color", self.theme_color),
            ("msapplication-TileColor", self.theme_color),
        ]
    }

    /// `(property, content)` pairs for Open Graph and Twitter cards
    pub fn property_tags(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("og:type", self.page_type),
            ("og:url", self.url),
            ("og:title", self.title),
            ("og:description", self.description),
            ("og:image", self.image),
            ("og:site_name", "Roselle"),
            ("twitter:card", "summary_large_image"),
            ("twitter:url", self.url),
            ("twitter:title", self.title),
            ("twitter:description", self.description),
            ("twitter:image", self.image),
        ]
    }

    /// schema.org Organization record
    pub fn structured_data(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Roselle",
            "description": self.description,
            "url": self.url,
            "logo": format!("{}/logo.png", self.url),
            "sameAs": SOCIAL_PROFILES,
            "contactPoint": {
                "@type": "ContactPoint",
                "telephone": CONTACT_PHONE,
                "contactType": "customer service",
                "email": CONTACT_EMAIL,
            },
            "address": {
                "@type": "PostalAddress",
                "addressCountry": "US",
            },
        })
    }

    /// JSON-LD text safe to embed in a `<script>` element
    pub fn structured_data_script(&self) -> String {
        self.structured_data().to_string().replace("</", "<\\/")
    }
}
