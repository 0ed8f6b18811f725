use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::i18n::use_i18n;

/// (reveal id, image, kicker key, title key)
const SECTORS: &[(&str, &str, &str, &str)] = &[
    (
        "sector-distribution",
        "https://images.pexels.com/photos/256219/pexels-photo-256219.jpeg?auto=compress&w=800&q=80",
        "sectors.distribution.kicker",
        "sectors.distribution.title",
    ),
    (
        "sector-services",
        "https://images.pexels.com/photos/256510/pexels-photo-256510.jpeg?auto=compress&w=800&q=80",
        "sectors.services.kicker",
        "sectors.services.title",
    ),
    (
        "sector-products",
        "https://images.pexels.com/photos/209251/pexels-photo-209251.jpeg?auto=compress&w=800&q=80",
        "sectors.products.kicker",
        "sectors.products.title",
    ),
];

#[function_component(Sectors)]
pub fn sectors() -> Html {
    let i18n = use_i18n();

    html! {
        <section class="sectors">
            <div class="sectors-backdrop"></div>
            <div class="container">
                <div class="sectors-intro">
                    <h3 class="eyebrow">{ i18n.t("sectors.heading") }</h3>
                    <p>{ i18n.t("sectors.body") }</p>
                </div>
                <div class="sector-grid">
                    { for SECTORS.iter().enumerate().map(|(i, (id, image, kicker, title))| html! {
                        <Reveal id={*id} class="sector-tile" delay_ms={(i as u32) * 200}>
                            <img src={*image} alt={i18n.t(title)} loading="lazy" />
                            <div class="sector-shade"></div>
                            <div class="sector-caption">
                                <h4>{ i18n.t(kicker) }</h4>
                                <h3>{ i18n.t(title) }</h3>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
