#[cfg(test)]
mod tests {
    use crate::core::accessibility::{
        AccessibilityFlag, AccessibilityPreferences, STORAGE_KEY, PreferenceStore,
        load_preferences, restore_preferences, toggle_preference,
    };
    use crate::core::testing::{ClassList, MemoryStore, RecordingService};
    use crate::core::waitlist::{
        ExtendedSignup, Field, FlowPhase, FormVariant, Interest, QuickSignup, SubmissionState,
        ValidationError, ValidationErrors, WaitlistError, WaitlistFlow, WaitlistForm,
    };

    fn complete_survey() -> WaitlistFlow<ExtendedSignup> {
        let mut flow = WaitlistFlow::new();
        flow.update_field(Field::FirstName, "Ada");
        flow.update_field(Field::PhoneNumber, "+15551234567");
        flow.update_field(Field::AgeGroup, "25-34");
        flow.update_field(Field::Gender, "female");
        flow.update_field(Field::City, "Austin");
        flow.toggle_multi_select(Field::Interests, "Wedding Decor");
        flow.update_field(Field::InterestLevel, "Very");
        flow.update_field(Field::PurchaseLikelihood, "Likely");
        flow.toggle_multi_select(Field::Factors, "Quality");
        flow.update_field(Field::Motivators, "Seasonal collections");
        flow
    }

    // ========================================================================
    // Waitlist flow
    // ========================================================================

    #[test]
    fn test_empty_name_blocks_submission() {
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::Email, "ada@example.com");

        let result = flow.begin_submit();

        assert!(matches!(result, Err(WaitlistError::Invalid(_))));
        assert_eq!(flow.phase(), FlowPhase::ValidationFailed);
        assert_eq!(
            flow.error(Field::Name),
            Some(&ValidationError::Required("Name is required"))
        );
        assert!(flow.error(Field::Email).is_none());
    }

    #[test]
    fn test_malformed_email_is_annotated() {
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::Name, "Ada");
        flow.update_field(Field::Email, "not-an-email");

        assert!(flow.begin_submit().is_err());
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(
            flow.error(Field::Email).map(ToString::to_string).as_deref(),
            Some("Invalid email address")
        );
    }

    #[test]
    fn test_padded_email_is_rejected_as_typed() {
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::Name, "Ada");
        flow.update_field(Field::Email, " ada@example.com ");

        assert!(matches!(flow.begin_submit(), Err(WaitlistError::Invalid(_))));
        assert_eq!(flow.state(), SubmissionState::Idle);
        assert_eq!(
            flow.error(Field::Email),
            Some(&ValidationError::Pattern("Invalid email address"))
        );
    }

    #[test]
    fn test_padded_phone_is_rejected_as_typed() {
        let mut flow = complete_survey();
        flow.update_field(Field::PhoneNumber, " +15551234567");

        assert!(flow.begin_submit().is_err());
        assert_eq!(
            flow.error(Field::PhoneNumber).map(ToString::to_string).as_deref(),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_whitespace_only_name_counts_as_empty() {
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::Name, "   ");
        flow.update_field(Field::Email, "ada@example.com");

        assert!(flow.begin_submit().is_err());
        assert!(flow.error(Field::Name).is_some());
    }

    #[test]
    fn test_toggling_an_interest_twice_is_a_no_op() {
        let mut flow = WaitlistFlow::<ExtendedSignup>::new();
        let before = flow.form().interests.clone();

        assert!(flow.toggle_multi_select(Field::Interests, "Flowers"));
        assert!(flow.form().has_interest(Interest::Flowers));
        assert!(!flow.toggle_multi_select(Field::Interests, "Flowers"));

        assert_eq!(flow.form().interests, before);
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut flow = WaitlistFlow::<ExtendedSignup>::new();
        assert!(!flow.toggle_multi_select(Field::Interests, "Candles"));
        assert!(flow.form().interests.is_empty());
    }

    #[test]
    fn test_zero_interests_blocks_extended_form() {
        let mut flow = complete_survey();
        flow.toggle_multi_select(Field::Interests, "Wedding Decor");

        assert!(flow.begin_submit().is_err());
        assert_eq!(
            flow.error(Field::Interests).map(ToString::to_string).as_deref(),
            Some("Please select at least one interest")
        );
        assert_eq!(flow.errors().len(), 1);
    }

    #[test]
    fn test_complete_survey_validates() {
        let mut flow = complete_survey();
        let pending = flow.begin_submit().unwrap();

        assert_eq!(pending.form.first_name, "Ada");
        assert_eq!(flow.phase(), FlowPhase::Submitting);
    }

    #[test]
    fn test_last_name_and_notifications_are_optional() {
        let flow = complete_survey();
        assert!(!ExtendedSignup::is_required(Field::LastName));
        assert!(!ExtendedSignup::is_required(Field::Notifications));
        assert!(flow.form().last_name.is_empty());
        assert!(!flow.form().notifications);
    }

    #[test]
    fn test_quick_form_ignores_survey_fields() {
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::City, "Austin");
        assert_eq!(flow.form(), &QuickSignup::default());
    }

    #[test]
    fn test_variant_policies() {
        assert_eq!(QuickSignup::VARIANT, FormVariant::Inline);
        assert_eq!(ExtendedSignup::VARIANT, FormVariant::Popup);
        assert!(FormVariant::Inline.clears_on_success());
        assert!(!FormVariant::Popup.clears_on_success());
        assert_eq!(FormVariant::Inline.success_display().as_millis(), 5000);
        assert_eq!(FormVariant::Popup.success_display().as_millis(), 3000);
    }

    // ========================================================================
    // Accessibility preferences
    // ========================================================================

    #[test]
    fn test_high_contrast_round_trip() {
        let store = MemoryStore::default();
        let mut classes = ClassList::default();
        let mut prefs = load_preferences(&store);

        toggle_preference(&mut prefs, AccessibilityFlag::HighContrast, &store, &mut classes);

        assert!(classes.contains("high-contrast"));
        let stored: serde_json::Value =
            serde_json::from_str(&store.read(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(stored["highContrast"], true);

        // Fresh page load against the same storage
        let mut reloaded_classes = ClassList::default();
        let restored = restore_preferences(&store, &mut reloaded_classes);
        assert!(restored.high_contrast);
        assert!(reloaded_classes.contains("high-contrast"));
        assert!(!reloaded_classes.contains("large-text"));
    }

    #[test]
    fn test_every_toggle_rewrites_full_record() {
        let store = MemoryStore::default();
        let mut classes = ClassList::default();
        let mut prefs = AccessibilityPreferences::default();

        toggle_preference(&mut prefs, AccessibilityFlag::LargeText, &store, &mut classes);
        toggle_preference(&mut prefs, AccessibilityFlag::ScreenReader, &store, &mut classes);
        toggle_preference(&mut prefs, AccessibilityFlag::LargeText, &store, &mut classes);

        let stored = load_preferences(&store);
        assert_eq!(stored, prefs);
        assert!(stored.screen_reader);
        assert!(!stored.large_text);
        assert!(classes.contains("screen-reader"));
        assert!(!classes.contains("large-text"));
    }

    #[test]
    fn test_empty_storage_restores_defaults() {
        let store = MemoryStore::default();
        let mut classes = ClassList::default();
        assert_eq!(
            restore_preferences(&store, &mut classes),
            AccessibilityPreferences::default()
        );
    }

    // ========================================================================
    // Submission service
    // ========================================================================

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_invalid_form_never_reaches_service() {
        let service = RecordingService::default();
        let mut flow = WaitlistFlow::<QuickSignup>::new();

        let result = flow.submit(&service).await;

        assert!(matches!(result, Err(WaitlistError::Invalid(_))));
        assert_eq!(service.calls(), 0);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_valid_quick_signup_succeeds_then_dismisses() {
        let service = RecordingService::default();
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::Name, "Ada");
        flow.update_field(Field::Email, "ada@example.com");

        let receipt = flow.submit(&service).await.unwrap();

        assert_eq!(service.calls(), 1);
        assert_eq!(flow.phase(), FlowPhase::Success);
        assert_eq!(flow.form(), &QuickSignup::default());
        assert!(flow.is_locked());

        assert!(flow.dismiss_success(receipt.ticket));
        assert_eq!(flow.phase(), FlowPhase::Idle);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_submit_during_success_is_busy() {
        let service = RecordingService::default();
        let mut flow = complete_survey();
        flow.submit(&service).await.unwrap();

        let second = flow.submit(&service).await;

        assert_eq!(second, Err(WaitlistError::Busy));
        assert_eq!(service.calls(), 1);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_service_rejection_annotates_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert(
            Field::Email,
            ValidationError::Pattern("Invalid email address"),
        );
        let service = RecordingService::rejecting(errors);
        let mut flow = WaitlistFlow::<QuickSignup>::new();
        flow.update_field(Field::Name, "Ada");
        flow.update_field(Field::Email, "ada@example.com");

        assert!(flow.submit(&service).await.is_err());
        assert_eq!(flow.phase(), FlowPhase::ValidationFailed);
        assert!(flow.error(Field::Email).is_some());
        assert!(!flow.is_locked());
    }

    // ========================================================================
    // Success display lifecycle (paused clock)
    // ========================================================================

    #[cfg(feature = "ssr")]
    mod lifecycle {
        use std::cell::{Cell, RefCell};
        use std::time::Duration;

        use tokio::time::{Instant, sleep};

        use super::complete_survey;
        use crate::core::testing::RecordingService;
        use crate::core::waitlist::{
            ExtendedSignup, Field, FlowPhase, INLINE_SUCCESS_DISPLAY, POPUP_SUCCESS_DISPLAY,
            QuickSignup, SIMULATED_LATENCY, SimulatedSubmission, WaitlistFlow, run_submission,
        };

        const JUST_BEFORE: Duration = Duration::from_millis(1);

        fn filled_quick() -> RefCell<WaitlistFlow<QuickSignup>> {
            let mut flow = WaitlistFlow::new();
            flow.update_field(Field::Name, "Ada");
            flow.update_field(Field::Email, "ada@example.com");
            RefCell::new(flow)
        }

        #[tokio::test(start_paused = true)]
        async fn test_inline_success_returns_to_idle_after_display() {
            let flow = filled_quick();
            let service = SimulatedSubmission::default();
            let accepted = Cell::new(false);
            let dismissed = Cell::new(false);
            let started = Instant::now();

            let (result, phase_before_timeout) = tokio::join!(
                run_submission::<QuickSignup, _, _>(
                    &flow,
                    &service,
                    |_| accepted.set(true),
                    || dismissed.set(true),
                ),
                async {
                    sleep(SIMULATED_LATENCY + INLINE_SUCCESS_DISPLAY - JUST_BEFORE).await;
                    flow.borrow().phase()
                },
            );

            assert!(result.is_ok());
            assert!(accepted.get());
            assert_eq!(phase_before_timeout, FlowPhase::Success);
            assert!(dismissed.get());
            assert!(started.elapsed() >= SIMULATED_LATENCY + INLINE_SUCCESS_DISPLAY);

            let flow = flow.borrow();
            assert_eq!(flow.phase(), FlowPhase::Idle);
            assert_eq!(flow.form(), &QuickSignup::default());
            assert!(!flow.is_locked());
        }

        #[tokio::test(start_paused = true)]
        async fn test_popup_closes_after_display() {
            let flow = RefCell::new(complete_survey());
            let service = RecordingService::default();
            let closed = Cell::new(false);
            let started = Instant::now();

            let (result, kept_answers) = tokio::join!(
                run_submission::<ExtendedSignup, _, _>(&flow, &service, |_| {}, || {
                    flow.borrow_mut().reset();
                    closed.set(true);
                }),
                async {
                    sleep(POPUP_SUCCESS_DISPLAY - JUST_BEFORE).await;
                    let flow = flow.borrow();
                    flow.phase() == FlowPhase::Success && flow.form() != &ExtendedSignup::default()
                },
            );

            assert!(result.is_ok());
            assert_eq!(service.calls(), 1);
            assert!(kept_answers);
            assert!(closed.get());
            assert!(started.elapsed() >= POPUP_SUCCESS_DISPLAY);
            assert_eq!(flow.borrow().form(), &ExtendedSignup::default());
        }

        #[tokio::test(start_paused = true)]
        async fn test_reset_during_display_skips_dismiss_callback() {
            let flow = filled_quick();
            let service = RecordingService::default();
            let dismissed = Cell::new(false);

            let (result, ()) = tokio::join!(
                run_submission::<QuickSignup, _, _>(&flow, &service, |_| {}, || dismissed.set(true)),
                async {
                    sleep(INLINE_SUCCESS_DISPLAY / 2).await;
                    flow.borrow_mut().reset();
                },
            );

            assert!(result.is_ok());
            assert!(!dismissed.get());
            assert_eq!(flow.borrow().phase(), FlowPhase::Idle);
        }
    }
}
