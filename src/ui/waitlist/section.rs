//! Inline waitlist section with the two-field signup

use leptos::prelude::*;

use super::WaitlistController;
use crate::core::waitlist::{Field, QuickSignup, WaitlistForm};
use crate::ui::common::{FormField, LoadingButton};
use crate::ui::decor::WaitlistParticles;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn WaitlistSection() -> impl IntoView {
    let controller = WaitlistController::<QuickSignup>::new();
    let locked = controller.locked();
    let succeeded = controller.succeeded();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit(None);
    };

    view! {
        <section id="waitlist" class="waitlist-section">
            <WaitlistParticles/>

            <div class="section-inner">
                <div class="section-heading landing-scroll-animate">
                    <h2 class="section-title script">"Be the First to Bloom with Us"</h2>
                    <p class="section-lead">
                        "Join our exclusive waitlist and be among the first to experience the magic of Roselle. "
                        "Get early access to our latest collections and special offers."
                    </p>
                    <div class="section-divider"></div>
                </div>

                <div class="waitlist-card landing-scroll-animate" class:waitlist-card-success=move || succeeded.get()>
                    <span class="waitlist-ornament waitlist-ornament-top" aria-hidden="true">
                        <Icon name=icons::HEART class="icon-lg"/>
                    </span>
                    <span class="waitlist-ornament waitlist-ornament-bottom" aria-hidden="true">
                        <Icon name=icons::SPARKLES class="icon-lg"/>
                    </span>

                    <Show
                        when=move || succeeded.get()
                        fallback=move || view! {
                            <form class="waitlist-form" on:submit=on_submit novalidate=true>
                                <FormField
                                    id="waitlist-name"
                                    label=Field::Name.label()
                                    required=QuickSignup::is_required(Field::Name)
                                    placeholder="Enter your beautiful name"
                                    autocomplete="name"
                                    value=controller.text(Field::Name)
                                    on_input=controller.on_input(Field::Name)
                                    on_focus=controller.on_focus(Field::Name)
                                    disabled=locked
                                    error=controller.error(Field::Name)
                                />
                                <FormField
                                    id="waitlist-email"
                                    label=Field::Email.label()
                                    required=QuickSignup::is_required(Field::Email)
                                    input_type="email"
                                    placeholder="your.email@example.com"
                                    autocomplete="email"
                                    value=controller.text(Field::Email)
                                    on_input=controller.on_input(Field::Email)
                                    on_focus=controller.on_focus(Field::Email)
                                    disabled=locked
                                    error=controller.error(Field::Email)
                                />

                                <LoadingButton
                                    loading=controller.submitting()
                                    text="Join Waitlist"
                                    loading_text="Joining Waitlist..."
                                    class="btn-primary btn-block"
                                />

                                <p class="waitlist-trust">
                                    "We respect your privacy · No spam, ever · Join 10,000+ others"
                                </p>
                            </form>
                        }
                    >
                        <div class="waitlist-success" role="status" aria-live="polite">
                            <div class="waitlist-success-icon">
                                <Icon name=icons::CHECK class="icon-lg"/>
                            </div>
                            <h3 class="waitlist-success-title">"Welcome to Roselle!"</h3>
                            <p class="waitlist-success-text">
                                "Thank you for joining our waitlist. We'll notify you as soon as we launch!"
                            </p>
                            <button
                                type="button"
                                class="btn-secondary"
                                on:click=move |_| controller.dismiss()
                            >
                                "Join Another Email"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
