use yew::prelude::*;

use crate::components::contact;
use crate::components::reveal::Reveal;
use crate::i18n::use_i18n;
use crate::scroll::anchor::scroll_to_section;

#[function_component(Approach)]
pub fn approach() -> Html {
    let i18n = use_i18n();
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(contact::SECTION_ID));

    html! {
        <section class="approach">
            <div class="container split">
                <Reveal id="approach-card" class="from-start">
                    <div class="glass-card">
                        <span class="eyebrow">{ i18n.t("approach.eyebrow") }</span>
                        <h3 class="serif">{ i18n.t("approach.heading") }</h3>
                        <p class="lead">{ i18n.t("approach.lead") }</p>
                        <p class="muted">{ i18n.t("approach.body") }</p>
                        <div class="button-row">
                            <button class="pill-button" onclick={to_contact}>{ i18n.t("approach.contact") }{" →"}</button>
                            <button class="pill-button outline">{ i18n.t("approach.read_more") }</button>
                        </div>
                    </div>
                </Reveal>
                <Reveal id="approach-image" class="from-end" delay_ms={300}>
                    <img
                        class="rounded-image"
                        src="https://images.pexels.com/photos/1181406/pexels-photo-1181406.jpeg?auto=compress&w=900&q=80"
                        alt={i18n.t("approach.image_alt")}
                        loading="lazy"
                    />
                </Reveal>
            </div>
        </section>
    }
}
