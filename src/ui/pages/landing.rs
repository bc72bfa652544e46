//! Landing page component
//!
//! A single scroll-animated page for Roselle featuring:
//! - SEO meta tags and structured data
//! - Hero section whose call to action opens the survey popup
//! - About, features and testimonial carousel
//! - Pricing packages with a selectable card
//! - The inline waitlist section and footer

use std::time::Duration;

use leptos::prelude::*;

use crate::core::content::{
    CONTACT_EMAIL, CONTACT_PHONE, Carousel, FEATURES, Feature, PLANS, Plan, PlanSelection,
    TESTIMONIALS, Testimonial,
};
use crate::core::motion::{CARD_STAGGER, ELEGANT_ROTATE, HERO_ITEM, HERO_STAGGER, SUBTLE_FLOAT};
use crate::core::performance::PerformanceProfile;
use crate::core::seo::SOCIAL_PROFILES;
use crate::ui::decor::{AmbientSparkles, FloatingFlowers, PetalBurst};
use crate::ui::icon::{Icon, icons};
use crate::ui::performance::use_performance_profile;
use crate::ui::seo::SeoTags;
use crate::ui::waitlist::{WaitlistPopup, WaitlistSection};

const BURST_VISIBLE: Duration = Duration::from_millis(3000);

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoTags/>

        <a href="#main-content" class="skip-link">"Skip to main content"</a>

        <main id="main-content" class="landing">
            <FloatingFlowers/>
            <HeroSection/>
            <AboutSection/>
            <FeaturesSection/>
            <TestimonialSection/>
            <PricingSection/>
            <WaitlistSection/>
            <Footer/>
        </main>

        <LandingStyles/>
        <ScrollAnimationScript/>
    }
}

/// Inline `animation` for the n-th staggered hero element
fn hero_item_style(profile: &PerformanceProfile, index: usize) -> String {
    format!(
        "animation: {}",
        HERO_ITEM.css_delayed(profile, HERO_STAGGER.delay_for(index))
    )
}

#[component]
fn HeroSection() -> impl IntoView {
    let profile = use_performance_profile();
    let popup_open = RwSignal::new(false);
    let burst = RwSignal::new(false);

    let on_cta = move |_| {
        burst.set(true);
        popup_open.set(true);
        set_timeout(move || burst.set(false), BURST_VISIBLE);
    };
    let close_popup = Callback::new(move |_| popup_open.set(false));
    let item = move |index: usize| move || profile.with(|p| hero_item_style(p, index));

    view! {
        <section id="home" class="hero">
            <AmbientSparkles/>

            <div class="hero-inner">
                <div class="hero-monogram" style=item(0)>"R & R"</div>
                <h1 class="hero-title script" style=item(1)>"Roselle"</h1>
                <div class="hero-tagline" style=item(2)>"Blooming Your World With Love"</div>
                <p class="hero-lead" style=item(3)>
                    "Roselle is where love, beauty, and nature meet, crafted to bring elegance into your everyday world."
                </p>

                <div class="hero-cta" style=item(4)>
                    <button
                        type="button"
                        class="btn-primary btn-lg"
                        on:click=on_cta
                        aria-haspopup="dialog"
                        aria-label="Join the Roselle waitlist"
                    >
                        <span>"Join Waitlist"</span>
                        <Icon name=icons::SPARKLES class="icon-text"/>
                    </button>
                    <PetalBurst active=burst.into()/>
                </div>
            </div>

            <a href="#about" class="scroll-indicator" aria-label="Scroll to About section">
                <Icon name=icons::CHEVRON_DOWN class="icon"/>
            </a>

            <WaitlistPopup is_open=popup_open.into() on_close=close_popup/>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    let profile = use_performance_profile();
    let rotate = move || format!("animation: {}", profile.with(|p| ELEGANT_ROTATE.css(p)));
    let float = move || format!("animation: {}", profile.with(|p| SUBTLE_FLOAT.css(p)));

    view! {
        <section id="about" class="about">
            <div class="section-inner about-grid">
                <div class="about-story">
                    <h2 class="section-title script landing-scroll-animate">"About Roselle"</h2>
                    <div class="section-divider landing-scroll-animate"></div>
                    <p class="about-text landing-scroll-animate">
                        "Roselle is where love, beauty, and nature meet, crafted to bring elegance into your everyday world."
                    </p>
                    <p class="about-text landing-scroll-animate">
                        "We believe that luxury isn't about extravagance, but about the thoughtful details that make life more beautiful. "
                        "Every piece we create is infused with the delicate balance of nature's grace and human artistry."
                    </p>
                    <p class="about-text landing-scroll-animate">
                        "From our carefully selected materials to our timeless designs, Roselle represents the perfect harmony "
                        "between modern sophistication and natural elegance."
                    </p>
                </div>

                <div class="about-emblem landing-scroll-animate" aria-hidden="true">
                    <div class="about-emblem-ring" style=rotate></div>
                    <div class="about-emblem-flower" style=float>
                        <Icon name=icons::FLOWER class="icon-xl"/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="section-inner">
                <div class="section-heading landing-scroll-animate">
                    <h2 class="section-title script">"What Makes Us Special"</h2>
                    <p class="section-lead">
                        "Discover the unique qualities that set Roselle apart and make every experience extraordinary."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES.iter().enumerate().map(|(index, feature)| {
                        view! { <FeatureCard feature=feature index=index/> }
                    }).collect_view()}
                </div>

                <p class="features-tagline landing-scroll-animate">
                    "Crafted with passion, delivered with love"
                </p>
            </div>
        </section>
    }
}

/// Feature card; reveal is staggered by position
#[component]
fn FeatureCard(feature: &'static Feature, index: usize) -> impl IntoView {
    let delay = format!(
        "transition-delay: {}ms",
        CARD_STAGGER.delay_for(index).as_millis()
    );

    view! {
        <article class="feature-card landing-scroll-animate" style=delay>
            <div class="feature-icon">
                <Icon name=feature.icon class="icon-lg"/>
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-text">{feature.description}</p>
        </article>
    }
}

#[component]
fn TestimonialSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = move || carousel.with(Carousel::index);

    view! {
        <section id="testimonials" class="testimonials">
            <div class="section-inner">
                <div class="section-heading landing-scroll-animate">
                    <h2 class="section-title script">"What Our Clients Say"</h2>
                    <p class="section-lead">
                        "Discover why couples and designers choose Roselle for their most special moments"
                    </p>
                </div>

                <div class="carousel landing-scroll-animate" aria-roledescription="carousel">
                    {move || {
                        TESTIMONIALS
                            .get(current())
                            .map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> })
                    }}

                    <div class="carousel-controls">
                        <button
                            type="button"
                            class="btn-icon carousel-arrow"
                            on:click=move |_| carousel.update(Carousel::previous)
                            aria-label="Previous testimonial"
                        >
                            <Icon name=icons::CHEVRON_LEFT class="icon"/>
                        </button>

                        <div class="carousel-dots">
                            {(0..TESTIMONIALS.len()).map(|index| {
                                view! {
                                    <button
                                        type="button"
                                        class="carousel-dot"
                                        class:carousel-dot-active=move || current() == index
                                        aria-current=move || (current() == index).to_string()
                                        on:click=move |_| carousel.update(|c| c.go_to(index))
                                        aria-label=format!("Go to testimonial {}", index + 1)
                                    ></button>
                                }
                            }).collect_view()}
                        </div>

                        <button
                            type="button"
                            class="btn-icon carousel-arrow"
                            on:click=move |_| carousel.update(Carousel::next)
                            aria-label="Next testimonial"
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="icon"/>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card" aria-live="polite">
            <div class="testimonial-stars" aria-label=format!("Rated {} out of 5", testimonial.rating)>
                {(0..testimonial.rating).map(|_| view! {
                    <Icon name=icons::STAR class="icon-text"/>
                }).collect_view()}
            </div>
            <Icon name=icons::QUOTE class="testimonial-quote-mark"/>
            <blockquote class="testimonial-text">{testimonial.text}</blockquote>
            <figcaption class="testimonial-author">
                <span class="testimonial-avatar" aria-hidden="true">{testimonial.initials()}</span>
                <span>
                    <span class="testimonial-name">{testimonial.name}</span>
                    <span class="testimonial-role">
                        {format!("{} · {}", testimonial.role, testimonial.location)}
                    </span>
                </span>
            </figcaption>
        </figure>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    let selection = RwSignal::new(PlanSelection::default());

    view! {
        <section id="pricing" class="pricing">
            <div class="section-inner">
                <div class="section-heading landing-scroll-animate">
                    <h2 class="section-title script">"Choose Your Perfect Package"</h2>
                    <p class="section-lead">
                        "From intimate arrangements to grand celebrations, we have the perfect floral solution for every occasion"
                    </p>
                </div>

                <div class="pricing-grid">
                    {PLANS.iter().enumerate().map(|(index, plan)| {
                        view! { <PricingCard plan=plan index=index selection=selection/> }
                    }).collect_view()}
                </div>

                <div class="pricing-custom landing-scroll-animate">
                    <h3 class="pricing-custom-title script">"Need Something Custom?"</h3>
                    <p class="section-lead">
                        "Every event is unique, and we're here to create something perfectly tailored to your vision. "
                        "Contact us for a personalized consultation and custom quote."
                    </p>
                    <a class="btn-secondary" href=format!("mailto:{CONTACT_EMAIL}?subject=Consultation")>
                        "Schedule Consultation"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Pricing card; clicking toggles the selection
#[component]
fn PricingCard(
    plan: &'static Plan,
    index: usize,
    selection: RwSignal<PlanSelection>,
) -> impl IntoView {
    let id = plan.id;
    let selected = move || selection.with(|s| s.is_selected(id));
    let delay = format!(
        "transition-delay: {}ms",
        CARD_STAGGER.delay_for(index).as_millis()
    );

    view! {
        <article
            class="pricing-card landing-scroll-animate"
            class:pricing-card-popular=plan.popular
            class:pricing-card-selected=selected
            style=delay
            role="button"
            tabindex="0"
            aria-pressed=move || selected().to_string()
            on:click=move |_| selection.update(|s| s.toggle(id))
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    selection.update(|s| s.toggle(id));
                }
            }
        >
            {plan.popular.then(|| view! {
                <div class="pricing-badge">"Most Popular"</div>
            })}

            <div class="pricing-icon">
                <Icon name=plan.icon class="icon-lg"/>
            </div>
            <h3 class="pricing-name">{plan.name}</h3>
            <p class="pricing-description">{plan.description}</p>
            <div class="pricing-price">
                <span class="pricing-amount">{plan.price_label()}</span>
                <span class="pricing-period">{plan.period}</span>
            </div>

            <ul class="pricing-features">
                {plan.features.iter().map(|feature| view! {
                    <li>
                        <Icon name=icons::CHECK class="icon-text"/>
                        <span>{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            <a
                href="#waitlist"
                class=if plan.popular { "btn-primary btn-block" } else { "btn-secondary btn-block" }
                on:click=|ev| ev.stop_propagation()
            >
                "Get Started"
            </a>
        </article>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let social = [
        ("Instagram", SOCIAL_PROFILES[0]),
        ("Facebook", SOCIAL_PROFILES[1]),
        ("Twitter", SOCIAL_PROFILES[2]),
    ];

    view! {
        <footer id="contact" class="footer">
            <div class="section-inner footer-grid">
                <div class="footer-brand">
                    <div class="hero-monogram">"R & R"</div>
                    <div class="footer-logo script">"Roselle"</div>
                    <p class="footer-text">
                        "Where love, beauty, and nature meet, crafted to bring elegance into your everyday world."
                    </p>
                    <a class="footer-contact" href=format!("mailto:{CONTACT_EMAIL}")>
                        <Icon name=icons::MAIL class="icon-text"/>
                        <span>{CONTACT_EMAIL}</span>
                    </a>
                    <a class="footer-contact" href=format!("tel:{CONTACT_PHONE}")>
                        <span>{CONTACT_PHONE}</span>
                    </a>
                </div>

                <nav class="footer-links" aria-label="Quick links">
                    <h4 class="footer-heading script">"Quick Links"</h4>
                    <ul>
                        <li><a href="#about">"About Us"</a></li>
                        <li><a href="#features">"Collections"</a></li>
                        <li><a href="#pricing">"Packages"</a></li>
                        <li><a href="#waitlist">"Join the Waitlist"</a></li>
                    </ul>
                </nav>

                <div class="footer-social">
                    <h4 class="footer-heading script">"Follow Us"</h4>
                    <ul>
                        {social.into_iter().map(|(name, href)| view! {
                            <li>
                                <a href=href target="_blank" rel="noopener noreferrer">{name}</a>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <span>"© 2025 Roselle. Made with"</span>
                <Icon name=icons::HEART class="icon-text footer-heart"/>
                <span>"by Roselle"</span>
            </div>
        </footer>
    }
}

/// Reveal timing tuned to the current performance profile
fn reveal_css(profile: &PerformanceProfile) -> String {
    if profile.reduce_motion {
        return ".landing-scroll-animate { opacity: 1; transform: none; transition: none; }"
            .to_string();
    }
    let millis = (800.0 * profile.duration_factor()).round();
    let distance = if profile.is_low() { 12 } else { 30 };
    format!(
        ".landing-scroll-animate {{ transform: translateY({distance}px); transition-duration: {millis}ms; }}\n\
         .landing-scroll-animate.visible {{ transform: none; }}"
    )
}

/// Reveal timing styles that follow the performance profile
#[component]
fn LandingStyles() -> impl IntoView {
    let profile = use_performance_profile();

    view! {
        <style>{move || profile.with(reveal_css)}</style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function revealAll(elements) {
                    elements.forEach(function(el) { el.classList.add('visible'); });
                }

                function initScrollAnimations() {
                    var elements = document.querySelectorAll('.landing-scroll-animate');
                    var root = document.documentElement;
                    if (!('IntersectionObserver' in window) || root.classList.contains('reduce-motion')) {
                        revealAll(elements);
                        return;
                    }

                    var observer = new IntersectionObserver(function(entries) {
                        entries.forEach(function(entry) {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -100px 0px'
                    });

                    elements.forEach(function(el) { observer.observe(el); });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::performance::PerformanceMode;

    #[test]
    fn test_hero_items_are_staggered() {
        let profile = PerformanceProfile::default();
        let first = hero_item_style(&profile, 0);
        let second = hero_item_style(&profile, 1);
        assert!(first.contains("heroRise"));
        assert!(first.contains(" 100ms "));
        assert!(second.contains(" 220ms "));
    }

    #[test]
    fn test_hero_items_are_static_under_reduced_motion() {
        let profile = PerformanceProfile::new(PerformanceMode::High, true);
        assert_eq!(hero_item_style(&profile, 3), "animation: none");
    }

    #[test]
    fn test_reveal_css_follows_profile() {
        let high = reveal_css(&PerformanceProfile::default());
        assert!(high.contains("800ms"));
        assert!(high.contains("translateY(30px)"));

        let low = reveal_css(&PerformanceProfile::new(PerformanceMode::Low, false));
        assert!(low.contains("300ms"));
        assert!(low.contains("translateY(12px)"));

        let reduced = reveal_css(&PerformanceProfile::new(PerformanceMode::High, true));
        assert!(reduced.contains("transition: none"));
    }
}
