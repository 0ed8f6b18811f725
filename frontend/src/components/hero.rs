use web_sys::{Event, HtmlImageElement, MouseEvent};
use yew::prelude::*;

use crate::carousel::hook::use_carousel;
use crate::components::contact;
use crate::config::CarouselConfig;
use crate::i18n::use_i18n;
use crate::scroll::anchor::scroll_to_section;

pub const SECTION_ID: &str = "home";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub carousel: CarouselConfig,
}

/// Whether a failed slide should be pointed at the fallback. A slide already
/// marked, or already showing the fallback, is left alone so a missing
/// fallback cannot loop.
fn needs_fallback(current_src: &str, marked: bool, fallback: &str) -> bool {
    !marked && !fallback.is_empty() && !current_src.ends_with(fallback)
}

/// Swaps a broken slide for the fallback asset, once.
fn fallback_on_error(fallback: String) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let Some(img) = e.target_dyn_into::<HtmlImageElement>() else {
            return;
        };
        if !needs_fallback(&img.src(), img.has_attribute("data-fallback"), &fallback) {
            return;
        }
        log::warn!("hero image failed to load: {}", img.src());
        if let Err(e) = img.set_attribute("data-fallback", "true") {
            log::warn!("could not mark hero image as fallback: {:?}", e);
        }
        img.set_src(&fallback);
    })
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let i18n = use_i18n();
    let driver = use_carousel(props.carousel.shared_images(), props.carousel.tick_interval_ms);

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(contact::SECTION_ID);
    });

    let crossfade = format!(
        "transition: opacity {}ms ease-in-out;",
        props.carousel.crossfade_ms
    );

    html! {
        <section id={SECTION_ID} class="hero">
            <div class="hero-slides">
                {
                    for driver.slides().map(|slide| html! {
                        <img
                            key={slide.src.to_string()}
                            src={slide.src.to_string()}
                            alt={format!("{} {}", i18n.t("hero.slide_alt"), slide.index + 1)}
                            class={classes!("hero-slide", slide.active.then_some("active"))}
                            style={format!("{} opacity: {};", crossfade, driver.opacity(slide.index))}
                            loading={if slide.index == 0 { "eager" } else { "lazy" }}
                            onerror={fallback_on_error(props.carousel.fallback_image.clone())}
                        />
                    })
                }
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <p class="hero-kicker fade-in-up">{ i18n.t("hero.kicker") }</p>
                <h1 class="hero-title fade-in-up delay-300">{ i18n.t("hero.title") }</h1>
                <p class="hero-subtitle fade-in-up delay-500">{ i18n.t("hero.subtitle") }</p>
                <button class="hero-cta fade-in-up delay-1000" onclick={to_contact} aria-label={i18n.t("hero.cta_aria")}>
                    { i18n.t("hero.cta") }
                </button>
            </div>

            <div class="hero-indicators">
                <div class="indicator">
                    <div class="indicator-line"></div>
                    <span>{ i18n.t("hero.indicator_criteria") }</span>
                </div>
                <div class="indicator">
                    <span>{ i18n.t("hero.indicator_partnering") }</span>
                    <div class="indicator-line"></div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_slide_swaps_once() {
        let fallback = "/assets/fallback.svg";
        assert!(needs_fallback("https://images.example.com/a.jpeg", false, fallback));
        assert!(!needs_fallback("https://images.example.com/a.jpeg", true, fallback));
    }

    #[test]
    fn failing_fallback_does_not_loop_when_unmarked() {
        let fallback = "/assets/fallback.svg";
        assert!(!needs_fallback("http://localhost:8080/assets/fallback.svg", false, fallback));
        assert!(!needs_fallback("https://images.example.com/a.jpeg", false, ""));
    }
}
