//! Survey-style waitlist popup

use leptos::prelude::*;

use super::WaitlistController;
use crate::core::waitlist::{
    AgeGroup, ExtendedSignup, Factor, Field, Gender, Interest, ScaleKind, WaitlistForm,
};
use crate::ui::common::{
    BaseModal, CheckboxField, ChipGroup, FormField, LoadingButton, RatingScale, SelectField,
    SpinnerStyle, TextAreaField,
};
use crate::ui::icon::{Icon, icons};

fn required(field: Field) -> bool {
    ExtendedSignup::is_required(field)
}

#[component]
pub fn WaitlistPopup(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let controller = WaitlistController::<ExtendedSignup>::new();
    let locked = controller.locked();
    let succeeded = controller.succeeded();

    // Closing abandons whatever is in flight
    let close = Callback::new(move |_| {
        controller.reset();
        on_close.run(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.submit(Some(close));
    };

    let interest_level = Signal::derive(move || {
        controller.with_form(|form| form.interest_level.map(|rating| rating.value()))
    });
    let purchase_likelihood = Signal::derive(move || {
        controller.with_form(|form| form.purchase_likelihood.map(|rating| rating.value()))
    });
    let notifications = Signal::derive(move || controller.with_form(|form| form.notifications));

    let interest_selected = Callback::new(move |label: &'static str| {
        Interest::from_label(label)
            .is_some_and(|interest| controller.with_form(|form| form.has_interest(interest)))
    });
    let factor_selected = Callback::new(move |label: &'static str| {
        Factor::from_label(label)
            .is_some_and(|factor| controller.with_form(|form| form.has_factor(factor)))
    });

    let age_options = AgeGroup::ALL
        .iter()
        .map(|group| (group.as_str(), group.as_str()))
        .collect::<Vec<_>>();
    let gender_options = Gender::ALL
        .iter()
        .map(|gender| (gender.as_str(), gender.display_name()))
        .collect::<Vec<_>>();

    view! {
        <BaseModal
            title="Join Our Waitlist"
            subtitle="Be the first to know when Roselle blooms into your world"
            is_open=is_open
            on_close=close
            max_width="modal-lg"
        >
            <Show
                when=move || succeeded.get()
                fallback=move || {
                    let age_options = age_options.clone();
                    let gender_options = gender_options.clone();
                    view! {
                        <form class="survey-form" on:submit=on_submit novalidate=true>
                            <div class="form-row">
                                <FormField
                                    id="survey-first-name"
                                    label=Field::FirstName.label()
                                    required=required(Field::FirstName)
                                    placeholder="Enter your first name"
                                    autocomplete="given-name"
                                    value=controller.text(Field::FirstName)
                                    on_input=controller.on_input(Field::FirstName)
                                    on_focus=controller.on_focus(Field::FirstName)
                                    disabled=locked
                                    error=controller.error(Field::FirstName)
                                />
                                <FormField
                                    id="survey-last-name"
                                    label=Field::LastName.label()
                                    placeholder="Enter your last name"
                                    autocomplete="family-name"
                                    value=controller.text(Field::LastName)
                                    on_input=controller.on_input(Field::LastName)
                                    on_focus=controller.on_focus(Field::LastName)
                                    disabled=locked
                                />
                            </div>

                            <FormField
                                id="survey-phone"
                                label=Field::PhoneNumber.label()
                                required=required(Field::PhoneNumber)
                                input_type="tel"
                                placeholder="Enter your phone number"
                                autocomplete="tel"
                                value=controller.text(Field::PhoneNumber)
                                on_input=controller.on_input(Field::PhoneNumber)
                                on_focus=controller.on_focus(Field::PhoneNumber)
                                disabled=locked
                                error=controller.error(Field::PhoneNumber)
                            />

                            <div class="form-row">
                                <SelectField
                                    id="survey-age-group"
                                    label=Field::AgeGroup.label()
                                    required=required(Field::AgeGroup)
                                    value=controller.text(Field::AgeGroup)
                                    on_change=controller.on_input(Field::AgeGroup)
                                    options=age_options
                                    placeholder="Please Select"
                                    disabled=locked
                                    error=controller.error(Field::AgeGroup)
                                />
                                <SelectField
                                    id="survey-gender"
                                    label=Field::Gender.label()
                                    required=required(Field::Gender)
                                    value=controller.text(Field::Gender)
                                    on_change=controller.on_input(Field::Gender)
                                    options=gender_options
                                    placeholder="Please Select"
                                    disabled=locked
                                    error=controller.error(Field::Gender)
                                />
                            </div>

                            <FormField
                                id="survey-city"
                                label=Field::City.label()
                                required=required(Field::City)
                                placeholder="Enter your city or area"
                                autocomplete="address-level2"
                                value=controller.text(Field::City)
                                on_input=controller.on_input(Field::City)
                                on_focus=controller.on_focus(Field::City)
                                disabled=locked
                                error=controller.error(Field::City)
                            />

                            <ChipGroup
                                id="survey-interests"
                                label=Field::Interests.label()
                                required=required(Field::Interests)
                                options=Interest::ALL.iter().map(Interest::label).collect()
                                is_selected=interest_selected
                                on_toggle=controller.on_toggle(Field::Interests)
                                disabled=locked
                                error=controller.error(Field::Interests)
                            />

                            <RatingScale
                                id="survey-interest-level"
                                label=Field::InterestLevel.label()
                                required=required(Field::InterestLevel)
                                labels=ScaleKind::Interest.labels()
                                value=interest_level
                                on_select=controller.on_input(Field::InterestLevel)
                                disabled=locked
                                error=controller.error(Field::InterestLevel)
                            />

                            <RatingScale
                                id="survey-purchase-likelihood"
                                label=Field::PurchaseLikelihood.label()
                                required=required(Field::PurchaseLikelihood)
                                labels=ScaleKind::Likelihood.labels()
                                value=purchase_likelihood
                                on_select=controller.on_input(Field::PurchaseLikelihood)
                                disabled=locked
                                error=controller.error(Field::PurchaseLikelihood)
                            />

                            <ChipGroup
                                id="survey-factors"
                                label=Field::Factors.label()
                                required=required(Field::Factors)
                                options=Factor::ALL.iter().map(Factor::label).collect()
                                is_selected=factor_selected
                                on_toggle=controller.on_toggle(Field::Factors)
                                disabled=locked
                                error=controller.error(Field::Factors)
                            />

                            <TextAreaField
                                id="survey-motivators"
                                label=Field::Motivators.label()
                                required=required(Field::Motivators)
                                placeholder="Tell us what would motivate you to purchase..."
                                value=controller.text(Field::Motivators)
                                on_input=controller.on_input(Field::Motivators)
                                on_focus=controller.on_focus(Field::Motivators)
                                rows=4
                                disabled=locked
                                error=controller.error(Field::Motivators)
                            />

                            <CheckboxField
                                id="survey-notifications"
                                label=Field::Notifications.label()
                                checked=notifications
                                on_change=controller.on_flag(Field::Notifications)
                                disabled=locked
                            />

                            <LoadingButton
                                loading=controller.submitting()
                                text="Join the Roselle Family"
                                spinner=SpinnerStyle::Bloom
                                class="btn-primary btn-block"
                            />
                        </form>
                    }
                }
            >
                <div class="waitlist-success" role="status" aria-live="polite">
                    <div class="waitlist-success-icon">
                        <Icon name=icons::FLOWER class="icon-lg"/>
                    </div>
                    <h3 class="waitlist-success-title">"Welcome to the Roselle Family!"</h3>
                    <p class="waitlist-success-text">
                        "Thank you for joining our waitlist. We'll notify you the moment Roselle blooms into the world."
                    </p>
                    <p class="waitlist-success-badge">
                        <Icon name=icons::HEART class="icon-text"/>
                        <span>"You're officially on the list!"</span>
                    </p>
                </div>
            </Show>
        </BaseModal>
    }
}
