use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::{about, contact, hero, services, testimonials};
use crate::i18n::use_i18n;
use crate::scroll::anchor::scroll_to_section;

/// (label key, target section id, shown in the mobile menu)
pub const NAV_LINKS: &[(&str, &str, bool)] = &[
    ("nav.about", hero::SECTION_ID, true),
    ("nav.portfolio", services::SECTION_ID, true),
    ("nav.investments", about::SECTION_ID, true),
    ("nav.partnering", testimonials::SECTION_ID, true),
    ("nav.news", contact::SECTION_ID, false),
    ("nav.contact", contact::SECTION_ID, true),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let i18n = use_i18n();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link = |key: &'static str, target: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(target);
            menu_open.set(false);
        });
        html! {
            <button class="nav-link" {onclick}>{ i18n.t(key) }</button>
        }
    };

    html! {
        <nav class={classes!("top-nav", props.scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        backdrop-filter: blur(12px);
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(17, 24, 39, 0.85);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #fff;
                    }
                    .nav-logo .mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        transform: rotate(45deg);
                        border-radius: 0.125rem;
                        background: linear-gradient(135deg, #60a5fa, #2563eb);
                    }
                    .nav-logo h1 {
                        margin: 0;
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                    }
                    .nav-logo p {
                        margin: 0;
                        font-size: 0.75rem;
                        color: #9ca3af;
                        letter-spacing: 0.3em;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #d1d5db;
                        font-size: 0.875rem;
                        cursor: pointer;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-login {
                        color: #60a5fa;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: block;
                            background: rgba(17, 24, 39, 0.95);
                            padding: 0.5rem 1rem 1rem;
                        }
                        .mobile-menu .nav-link,
                        .mobile-menu .nav-login {
                            display: block;
                            width: 100%;
                            text-align: start;
                            padding: 0.75rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="mark"></div>
                    <div>
                        <h1>{ i18n.t("brand.name") }</h1>
                        <p>{ i18n.t("brand.tagline") }</p>
                    </div>
                </div>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(key, target, _)| link(*key, *target)) }
                    <LanguageSwitcher />
                    <button class="nav-login">{ i18n.t("nav.login") }</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label={i18n.t("nav.menu")}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                {
                    for NAV_LINKS
                        .iter()
                        .filter(|(_, _, mobile)| *mobile)
                        .map(|(key, target, _)| link(*key, *target))
                }
                <LanguageSwitcher />
                <button class="nav-login">{ i18n.t("nav.login") }</button>
            </div>
        </nav>
    }
}

