use yew::prelude::*;

use crate::components::reveal::{Reveal, TrackedSection};
use crate::i18n::use_i18n;

pub const SECTION_ID: &str = "services";

struct ServiceCard {
    accent: &'static str,
    title: &'static str,
    body: &'static str,
    footnote: &'static str,
}

const CARDS: &[ServiceCard] = &[
    ServiceCard {
        accent: "blue",
        title: "services.consulting.title",
        body: "services.consulting.body",
        footnote: "services.consulting.footnote",
    },
    ServiceCard {
        accent: "green",
        title: "services.support.title",
        body: "services.support.body",
        footnote: "services.support.footnote",
    },
];

const OFFERINGS: &[&str] = &[
    "services.offering.search",
    "services.offering.prices",
    "services.offering.inspection",
    "services.offering.documents",
    "services.offering.certificates",
];

#[function_component(Services)]
pub fn services() -> Html {
    let i18n = use_i18n();

    html! {
        <TrackedSection id={SECTION_ID} class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="fade-up">{ i18n.t("services.heading") }</h2>
                    <p>{ i18n.t("services.subheading") }</p>
                </div>

                <div class="card-grid">
                    { for CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div class={classes!("card", "fade-up", format!("delay-{}", i * 200))}>
                            <div class={classes!("card-icon", card.accent)}><div class="glyph"></div></div>
                            <h3>{ i18n.t(card.title) }</h3>
                            <p>{ i18n.t(card.body) }</p>
                            <p class="footnote">{ i18n.t(card.footnote) }</p>
                        </div>
                    }) }
                    <div class="card fade-up delay-400 wide">
                        <div class="card-icon purple"><div class="glyph"></div></div>
                        <h3>{ i18n.t("services.services.title") }</h3>
                        <ul class="offerings">
                            { for OFFERINGS.iter().map(|key| html! { <li>{ i18n.t(key) }</li> }) }
                        </ul>
                        <p class="footnote">{ i18n.t("services.services.footnote") }</p>
                    </div>
                </div>

                <Reveal id="services-banner" class="banner">
                    <div class="banner-overlay">
                        <h3>{ i18n.t("services.banner.title") }</h3>
                        <button class="pill-button">{ i18n.t("services.banner.cta") }</button>
                    </div>
                </Reveal>
            </div>
        </TrackedSection>
    }
}
