use leptos::prelude::*;

const BLOOM_PETALS: usize = 5;

/// Spinner look
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SpinnerStyle {
    /// Plain ring
    #[default]
    Circle,
    /// Five petals turning around a center
    Bloom,
}

impl SpinnerStyle {
    fn class(self) -> &'static str {
        match self {
            SpinnerStyle::Circle => "spinner-circle",
            SpinnerStyle::Bloom => "spinner-bloom",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SpinnerSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

fn spinner_class(style: SpinnerStyle, size: SpinnerSize) -> String {
    format!("spinner {} {}", style.class(), size.class())
}

#[component]
pub fn Spinner(
    #[prop(optional)] style: SpinnerStyle,
    #[prop(optional)] size: SpinnerSize,
) -> impl IntoView {
    view! {
        <span class=spinner_class(style, size) role="status" aria-live="polite">
            {match style {
                SpinnerStyle::Circle => view! { <span class="spinner-circle-inner"></span> }.into_any(),
                SpinnerStyle::Bloom => view! {
                    <span class="spinner-bloom-inner">
                        {(0..BLOOM_PETALS)
                            .map(|i| view! {
                                <span class="spinner-petal" style=format!("--petal-index: {i}")></span>
                            })
                            .collect_view()}
                    </span>
                }.into_any(),
            }}
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}

/// Submit button that shows a spinner and `loading_text` while a submission is in flight
#[component]
pub fn LoadingButton(
    loading: Signal<bool>,
    text: &'static str,
    #[prop(default = "Joining...")] loading_text: &'static str,
    #[prop(optional)] spinner: SpinnerStyle,
    #[prop(default = "btn-primary")] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=class
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show when=move || loading.get() fallback=move || view! { <span>{text}</span> }>
                <span class="btn-loading">
                    <Spinner style=spinner/>
                    <span>{loading_text}</span>
                </span>
            </Show>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_class_combines_style_and_size() {
        assert_eq!(
            spinner_class(SpinnerStyle::Bloom, SpinnerSize::Large),
            "spinner spinner-bloom spinner-lg"
        );
        assert_eq!(
            spinner_class(SpinnerStyle::default(), SpinnerSize::default()),
            "spinner spinner-circle spinner-sm"
        );
    }
}
