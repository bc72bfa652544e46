use leptos::prelude::*;

fn icon_src(name: &str) -> String {
    format!("/icons/{name}.svg")
}

/// Decorative SVG icon from `public/icons`; the surrounding control carries the label
#[component]
pub fn Icon(name: &'static str, #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <img src=icon_src(name) class=class alt="" aria-hidden="true" draggable=false/>
    }
}

pub mod icons {
    pub const ACCESSIBILITY: &str = "accessibility";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CROWN: &str = "crown";
    pub const FLOWER: &str = "flower";
    pub const HEART: &str = "heart";
    pub const MAIL: &str = "mail";
    pub const PALETTE: &str = "palette";
    pub const QUOTE: &str = "quote";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const X: &str = "x";

    pub const ALL: &[&str] = &[
        ACCESSIBILITY,
        ALERT_CIRCLE,
        CHECK,
        CHEVRON_DOWN,
        CHEVRON_LEFT,
        CHEVRON_RIGHT,
        CROWN,
        FLOWER,
        HEART,
        MAIL,
        PALETTE,
        QUOTE,
        SPARKLES,
        STAR,
        X,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{FEATURES, PLANS};

    #[test]
    fn test_icon_src() {
        assert_eq!(icon_src(icons::CHEVRON_LEFT), "/icons/chevron-left.svg");
    }

    #[test]
    fn test_content_icons_are_shipped() {
        for name in FEATURES.iter().map(|f| f.icon).chain(PLANS.iter().map(|p| p.icon)) {
            assert!(icons::ALL.contains(&name), "missing icon {name}");
        }
    }
}
