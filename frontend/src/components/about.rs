use yew::prelude::*;

use crate::components::reveal::{Reveal, TrackedSection};
use crate::i18n::use_i18n;

pub const SECTION_ID: &str = "about";

const PILLARS: &[(&str, &str)] = &[
    ("about.pillar.investments.kicker", "about.pillar.investments"),
    ("about.pillar.ambition.kicker", "about.pillar.ambition"),
    ("about.pillar.teams.kicker", "about.pillar.teams"),
    ("about.pillar.results.kicker", "about.pillar.results"),
];

#[function_component(About)]
pub fn about() -> Html {
    let i18n = use_i18n();

    html! {
        <TrackedSection id={SECTION_ID} class="about">
            <div class="container">
                <div class="pillars">
                    { for PILLARS.iter().map(|(kicker, title)| html! {
                        <div class="pillar fade-up">
                            <div class="pillar-kicker">{ i18n.t(kicker) }</div>
                            <div class="pillar-title">{ i18n.t(title) }</div>
                        </div>
                    }) }
                </div>

                <div class="split">
                    <Reveal id="about-text">
                        <h2 class="serif">
                            <span class="italic">{ i18n.t("about.heading_em") }</span>
                            {" "}
                            { i18n.t("about.heading") }
                        </h2>
                        <p class="lead">{ i18n.t("about.lead") }</p>
                        <p class="muted">{ i18n.t("about.body") }</p>
                        <button class="pill-button">{ i18n.t("about.cta") }{" →"}</button>
                    </Reveal>
                    <Reveal id="about-image" delay_ms={300}>
                        <img
                            class="rounded-image"
                            src="https://images.pexels.com/photos/325185/pexels-photo-325185.jpeg?auto=compress&w=800&q=80"
                            alt={i18n.t("about.image_alt")}
                            loading="lazy"
                        />
                    </Reveal>
                </div>
            </div>
        </TrackedSection>
    }
}
