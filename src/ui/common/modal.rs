use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Class put on `<body>` while a dialog is open, to stop the page behind it scrolling
const SCROLL_LOCK_CLASS: &str = "modal-open";

fn dialog_title_id(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("dialog-{slug}")
}

/// Dialog shell used by the waitlist survey and the accessibility panel
///
/// The dialog stays mounted while closed so form state survives; it closes on
/// Escape, on a click outside the card and from the header button.
#[component]
pub fn BaseModal(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
    /// One of `modal-sm`, `modal-md`, `modal-lg`
    #[prop(default = "modal-md")]
    max_width: &'static str,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });
        on_cleanup(move || drop(handle));

        Effect::new(move |_| {
            let open = is_open.get();
            if let Some(body) = document().body() {
                let classes = body.class_list();
                let result = if open {
                    classes.add_1(SCROLL_LOCK_CLASS)
                } else {
                    classes.remove_1(SCROLL_LOCK_CLASS)
                };
                if let Err(err) = result {
                    leptos::logging::warn!("Could not toggle scroll lock: {err:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = SCROLL_LOCK_CLASS;

    let title_id = dialog_title_id(title);
    let labelled_by = title_id.clone();

    view! {
        <div
            class="modal-backdrop"
            class:modal-hidden=move || !is_open.get()
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class="modal-scrim" on:click=move |_| on_close.run(())></div>
            <div
                class=format!("modal-card {max_width}")
                role="dialog"
                aria-modal="true"
                aria-labelledby=labelled_by
            >
                <header class="modal-header">
                    <div>
                        <h3 id=title_id class="modal-title script">{title}</h3>
                        {subtitle.map(|text| view! { <p class="modal-subtitle">{text}</p> })}
                    </div>
                    <button
                        type="button"
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="icon"/>
                    </button>
                </header>

                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
