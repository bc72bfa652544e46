//! Decorative layers: floating flowers, pointer sparkles and petal bursts
//!
//! Everything random is generated after mount so the server markup and the
//! first client render agree.

use leptos::prelude::*;

use crate::core::decor::{
    AMBIENT_SPARKLE_COUNT, FLOWER_COUNT, Flower, FlowerKind, PETAL_BURST_COUNT, Particle, Petal,
    WAITLIST_PARTICLE_COUNT, generate_flowers, generate_particles, generate_petal_burst,
    generate_sparkles,
};
use crate::core::motion::{RIPPLE, SPARKLE};
use crate::ui::performance::use_performance_profile;

const TRAIL_LENGTH: usize = 12;

/// SVG body for one decorative shape
#[component]
fn FlowerShape(kind: FlowerKind, color: &'static str, gradient_id: String) -> impl IntoView {
    let fill = format!("url(#{gradient_id})");
    let (start, end) = match kind {
        FlowerKind::Flower => ("0.9", "0.6"),
        FlowerKind::Petal => ("0.8", "0.4"),
        FlowerKind::Leaf => ("0.7", "0.3"),
    };

    view! {
        <svg viewBox=kind.view_box() fill="none" class="decor-svg">
            <defs>
                <linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color=color stop-opacity=start/>
                    <stop offset="100%" stop-color=color stop-opacity=end/>
                </linearGradient>
            </defs>
            {kind.paths().iter().map(|d| view! { <path d=*d fill=fill.clone()/> }).collect_view()}
            {(kind == FlowerKind::Flower).then(|| view! {
                <circle cx="30" cy="30" r="8" fill=color opacity="0.8"/>
            })}
        </svg>
    }
}

fn flower_style(flower: &Flower, animate: bool) -> String {
    let size = flower.box_px();
    let animation = if animate {
        format!(
            "flowerFloat {:.2}s ease-in-out {:.2}s infinite",
            flower.float_seconds(),
            flower.delay
        )
    } else {
        "none".to_string()
    };
    format!(
        "left: {:.2}%; top: {:.2}%; width: {size:.1}px; height: {size:.1}px; \
         z-index: {}; --flower-rotation: {:.1}deg; animation: {animation}",
        flower.x, flower.y, flower.id, flower.rotation
    )
}

/// Fixed full-page layer of drifting flowers, petals and leaves
#[component]
pub fn FloatingFlowers() -> impl IntoView {
    let profile = use_performance_profile();
    let flowers = RwSignal::new(Vec::<Flower>::new());
    let trail = RwSignal::new(Vec::<Particle>::new());
    let pointer = RwSignal::new((0.0_f64, 0.0_f64));
    let hovering = RwSignal::new(false);

    // Generated once per mount; a tier change only shows more or fewer of them
    Effect::new(move |_| {
        let mut rng = rand::thread_rng();
        flowers.set(generate_flowers(&mut rng, FLOWER_COUNT));
        trail.set(generate_sparkles(&mut rng, TRAIL_LENGTH));
    });

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::{mousemove, mouseout};

        let move_handle = window_event_listener(mousemove, move |ev| {
            pointer.set((f64::from(ev.client_x()), f64::from(ev.client_y())));
            hovering.set(true);
        });
        let out_handle = window_event_listener(mouseout, move |ev| {
            if ev.related_target().is_none() {
                hovering.set(false);
            }
        });
        on_cleanup(move || {
            drop(move_handle);
            drop(out_handle);
        });
    }

    let animate = move || profile.with(|p| p.enable_complex_animations());
    let ring_style = move || {
        let (x, y) = pointer.get();
        format!(
            "left: {x}px; top: {y}px; animation: {}",
            profile.with(|p| RIPPLE.css(p))
        )
    };

    view! {
        <div class="decor-layer" aria-hidden="true">
            <div class="decor-glow" class:decor-glow-active=move || hovering.get()></div>

            <For
                each=move || flowers.with(|all| profile.with(|p| p.visible(all).to_vec()))
                key=|flower| flower.id
                children=move |flower| {
                    let style = flower_style(&flower, animate());
                    view! {
                        <div class="decor-flower" style=style>
                            <FlowerShape
                                kind=flower.kind
                                color=flower.color
                                gradient_id=format!("{}-{}", flower.kind.as_str(), flower.id)
                            />
                        </div>
                    }
                }
            />

            <Show when=move || hovering.get() && animate()>
                <div class="decor-pointer-ring" style=ring_style></div>
                {move || {
                    let (x, y) = pointer.get();
                    trail.get().into_iter().map(|dot| {
                        let style = format!(
                            "left: {x}px; top: {y}px; --trail-x: {:.0}px; --trail-y: {:.0}px; animation-delay: {:.1}s",
                            dot.drift * 2.5,
                            (dot.x - 50.0),
                            dot.id as f32 * 0.1
                        );
                        view! { <span class="decor-trail" style=style></span> }
                    }).collect_view()
                }}
            </Show>
        </div>
    }
}

/// Twinkling dots; `count` is scaled to the device
#[component]
pub fn AmbientSparkles(#[prop(default = AMBIENT_SPARKLE_COUNT)] count: usize) -> impl IntoView {
    let profile = use_performance_profile();
    let sparkles = RwSignal::new(Vec::<Particle>::new());

    Effect::new(move |_| {
        sparkles.set(generate_sparkles(&mut rand::thread_rng(), count));
    });

    view! {
        <div class="decor-sparkles" aria-hidden="true">
            {move || {
                let animation = profile.with(|p| SPARKLE.css(p));
                let shown = sparkles.with(|all| profile.with(|p| p.visible(all).to_vec()));
                shown.into_iter().map(|s| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; --drift: {:.0}px; animation: {animation}; \
                         animation-duration: {:.1}s; animation-delay: {:.1}s",
                        s.x, s.y, s.drift, s.duration, s.delay
                    );
                    view! { <span class="decor-sparkle" style=style></span> }
                }).collect_view()
            }}
        </div>
    }
}

/// Slow particles behind the waitlist card
#[component]
pub fn WaitlistParticles() -> impl IntoView {
    let profile = use_performance_profile();
    let particles = RwSignal::new(Vec::<Particle>::new());

    Effect::new(move |_| {
        particles.set(generate_particles(
            &mut rand::thread_rng(),
            WAITLIST_PARTICLE_COUNT,
        ));
    });

    let animate = move || profile.with(|p| p.enable_complex_animations());

    view! {
        <div class="decor-particles" aria-hidden="true">
            {move || {
                let running = animate();
                let shown = particles.with(|all| profile.with(|p| p.visible(all).to_vec()));
                shown.into_iter().map(|p| {
                    let animation = if running {
                        format!("particleDrift {:.1}s ease-in-out {:.1}s infinite", p.duration, p.delay)
                    } else {
                        "none".to_string()
                    };
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; --drift: {:.0}px; animation: {animation}",
                        p.x, p.y, p.drift
                    );
                    view! { <span class="decor-particle" style=style></span> }
                }).collect_view()
            }}
        </div>
    }
}

/// Burst of petals shown while `active` is true
#[component]
pub fn PetalBurst(active: Signal<bool>) -> impl IntoView {
    let profile = use_performance_profile();
    let petals = RwSignal::new(Vec::<Petal>::new());

    Effect::new(move |_| {
        if active.get() {
            let count = profile.with_untracked(|p| p.scale_count(PETAL_BURST_COUNT));
            petals.set(generate_petal_burst(&mut rand::thread_rng(), count));
        } else {
            petals.set(Vec::new());
        }
    });

    view! {
        <Show when=move || active.get() && profile.with(|p| !p.reduce_motion)>
            <div class="decor-burst" aria-hidden="true">
                {move || petals.get().into_iter().map(|petal| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; --petal-rotation: {:.0}deg; --petal-scale: {:.2}; \
                         --petal-dx: {:.0}px; --petal-dy: {:.0}px; animation-delay: {:.2}s",
                        petal.x, petal.y, petal.rotation, petal.scale, petal.dx, petal.dy, petal.delay
                    );
                    view! {
                        <div class="decor-petal" style=style>
                            <FlowerShape
                                kind=FlowerKind::Petal
                                color=petal.color
                                gradient_id=format!("burst-{}", petal.id)
                            />
                        </div>
                    }
                }).collect_view()}
            </div>
        </Show>
    }
}
