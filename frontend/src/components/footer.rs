use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::newsletter::NewsletterForm;
use crate::config::ContactConfig;
use crate::i18n::use_i18n;
use crate::Route;

const ABOUT_LINKS: &[&str] = &[
    "nav.portfolio",
    "nav.investments",
    "nav.partnering",
    "nav.news",
    "nav.contact",
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact: ContactConfig,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let i18n = use_i18n();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="split">
                    <div class="footer-about fade-in-start">
                        <div class="footer-brand">
                            <div class="mark"></div>
                            <span class="serif">{ i18n.t("brand.name") }</span>
                        </div>
                        <p>{ i18n.t("footer.blurb.entities") }</p>
                        <p>{ i18n.t("footer.blurb.services") }</p>
                        <p>{ i18n.t("footer.blurb.followup") }</p>
                    </div>

                    <div class="footer-side fade-in-end delay-300">
                        <NewsletterForm />
                        <div class="footer-columns">
                            <div>
                                <h4>{ i18n.t("footer.about") }</h4>
                                <ul>
                                    { for ABOUT_LINKS.iter().map(|key| html! { <li>{ i18n.t(key) }</li> }) }
                                </ul>
                            </div>
                            <div>
                                <h4>{ i18n.t("footer.contact") }</h4>
                                <ul>
                                    { for props.contact.address_lines.iter().map(|line| html! { <li>{ line }</li> }) }
                                    { for props.contact.phones.iter().map(|phone| html! { <li dir="ltr">{ phone }</li> }) }
                                    <li>{ &props.contact.email }</li>
                                </ul>
                            </div>
                            <div>
                                <h4>{ i18n.t("footer.legal") }</h4>
                                <ul>
                                    <li>{ i18n.t("footer.careers") }</li>
                                    <li><Link<Route> to={Route::Privacy}>{ i18n.t("footer.privacy") }</Link<Route>></li>
                                    <li><Link<Route> to={Route::Terms}>{ i18n.t("footer.terms") }</Link<Route>></li>
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="copyright">
                    { format!("{} {} {}. {} | ", i18n.t("footer.copyright"), year, i18n.t("brand.full_name"), i18n.t("footer.rights")) }
                    <span>{ i18n.t("footer.disclosures") }{" "}<span class="accent">{ i18n.t("brand.full_name") }</span></span>
                </div>
            </div>
        </footer>
    }
}
