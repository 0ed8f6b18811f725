use yew::prelude::*;

use crate::components::reveal::{Reveal, TrackedSection};
use crate::i18n::use_i18n;

pub const SECTION_ID: &str = "team";

/// (accent, name key, role key, bio key)
const TEAM: &[(&str, &str, &str, &str)] = &[
    ("blue", "team.director.name", "team.director.role", "team.director.bio"),
    ("green", "team.assistant.name", "team.assistant.role", "team.assistant.bio"),
];

/// (quote key, attribution key)
const TESTIMONIALS: &[(&str, &str)] = &[
    ("testimonials.furniture.quote", "testimonials.furniture.by"),
    ("testimonials.trading.quote", "testimonials.trading.by"),
    ("testimonials.construction.quote", "testimonials.construction.by"),
];

const PARTNERS: &[&str] = &["Technologies", "duo.fi", "BRAND", "LOGO"];

const STARS: usize = 5;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let i18n = use_i18n();

    html! {
        <TrackedSection id={SECTION_ID} class="team">
            <div class="container">
                <div class="section-header">
                    <h2 class="fade-up">
                        { i18n.t("team.heading") }
                        <span class="subheading">{ i18n.t("team.subheading") }</span>
                    </h2>
                </div>

                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(i, (accent, name, role, bio))| html! {
                        <div class={classes!("card", "fade-up", format!("delay-{}", i * 200))}>
                            <div class={classes!("avatar", *accent)}>
                                <div class="avatar-inner"><div class="avatar-dot"></div></div>
                            </div>
                            <h3>{ i18n.t(name) }</h3>
                            <p class="role">{ i18n.t(role) }</p>
                            <p>{ i18n.t(bio) }</p>
                        </div>
                    }) }
                </div>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, (quote, by))| html! {
                        <Reveal id={format!("testimonial-{}", i)} class="testimonial" delay_ms={(i as u32) * 150}>
                            <div class="stars" aria-label={format!("{}/{}", STARS, STARS)}>
                                { for (0..STARS).map(|_| html! { <span class="star">{"★"}</span> }) }
                            </div>
                            <p class="quote">{ format!("“{}”", i18n.t(quote)) }</p>
                            <div class="attribution">{ format!("- {}", i18n.t(by)) }</div>
                        </Reveal>
                    }) }
                </div>

                <Reveal id="partner-logos" class="partners">
                    { for PARTNERS.iter().map(|name| html! { <div class="partner">{ *name }</div> }) }
                </Reveal>
            </div>
        </TrackedSection>
    }
}
