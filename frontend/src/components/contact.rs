use yew::prelude::*;

use crate::components::reveal::{Reveal, TrackedSection};
use crate::config::ContactConfig;
use crate::i18n::use_i18n;

pub const SECTION_ID: &str = "contact";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactConfig,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let i18n = use_i18n();
    let contact = &props.contact;

    html! {
        <TrackedSection id={SECTION_ID} class="contact">
            <div class="container split">
                <div class="contact-details fade-up">
                    <h2>{ i18n.t("contact.heading") }</h2>
                    <div class="contact-block">
                        <h4>{ i18n.t("contact.address") }</h4>
                        { for contact.address_lines.iter().map(|line| html! { <p>{ line }</p> }) }
                    </div>
                    <div class="contact-block">
                        <h4>{ i18n.t("contact.phone") }</h4>
                        { for contact.phones.iter().map(|phone| html! {
                            <p><a href={format!("tel:{}", phone.replace(' ', ""))} dir="ltr">{ phone }</a></p>
                        }) }
                    </div>
                    <div class="contact-block">
                        <h4>{ i18n.t("contact.email") }</h4>
                        <p><a href={format!("mailto:{}", contact.email)}>{ &contact.email }</a></p>
                    </div>
                </div>
                <Reveal id="contact-map" class="map" delay_ms={200}>
                    <iframe
                        title={i18n.t("contact.map_title")}
                        src={contact.map_embed_url.clone()}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    ></iframe>
                </Reveal>
            </div>
        </TrackedSection>
    }
}
