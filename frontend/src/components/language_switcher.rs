use yew::prelude::*;

use crate::i18n::use_i18n;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let i18n = use_i18n();
    let label = i18n.language.switch_label();

    let onclick = {
        let i18n = i18n.clone();
        Callback::from(move |_: MouseEvent| i18n.toggle())
    };

    html! {
        <button
            class="language-switcher"
            {onclick}
            aria-label={format!("{} {}", i18n.t("nav.switch_to"), label)}
        >
            <span class="globe">{"🌐"}</span>
            <span>{ label }</span>
        </button>
    }
}
