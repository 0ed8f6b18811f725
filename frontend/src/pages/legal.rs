use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::i18n::use_i18n;
use crate::Route;

const PRIVACY_SECTIONS: &[(&str, &str)] = &[
    ("privacy.collect.title", "privacy.collect.body"),
    ("privacy.newsletter.title", "privacy.newsletter.body"),
    ("privacy.storage.title", "privacy.storage.body"),
    ("privacy.contact.title", "privacy.contact.body"),
];

const TERMS_SECTIONS: &[(&str, &str)] = &[
    ("terms.entities.title", "terms.entities.body"),
    ("terms.advice.title", "terms.advice.body"),
    ("terms.liability.title", "terms.liability.body"),
];

const NOT_FOUND_SECTIONS: &[(&str, &str)] = &[("notfound.heading", "notfound.body")];

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    sections: &'static [(&'static str, &'static str)],
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    let i18n = use_i18n();

    html! {
        <div class="legal-container">
            <style>
                {r#"
                    .legal-container {
                        min-height: 100vh;
                        background: #f9fafb;
                        color: #374151;
                        padding: 2rem 1.5rem 4rem;
                    }
                    .legal-header {
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .legal-header a {
                        color: #1d4ed8;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .legal-body {
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.7;
                    }
                    .legal-body h1 {
                        font-family: Georgia, serif;
                        color: #111827;
                    }
                "#}
            </style>
            <div class="legal-header">
                <Link<Route> to={Route::Home}>{ format!("← {}", i18n.t("legal.back")) }</Link<Route>>
                <LanguageSwitcher />
            </div>
            <div class="legal-body">
                <h1>{ i18n.t(props.title) }</h1>
                { for props.sections.iter().map(|(title, body)| html! {
                    <section>
                        <h2>{ i18n.t(title) }</h2>
                        <p>{ i18n.t(body) }</p>
                    </section>
                }) }
            </div>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage title="privacy.title" sections={PRIVACY_SECTIONS} /> }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! { <LegalPage title="terms.title" sections={TERMS_SECTIONS} /> }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! { <LegalPage title="notfound.title" sections={NOT_FOUND_SECTIONS} /> }
}
