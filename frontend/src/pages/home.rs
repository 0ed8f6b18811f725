use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    about::About, approach::Approach, contact::Contact, footer::Footer, hero::Hero, nav::Nav,
    progress_bar::ProgressBar, sectors::Sectors, services::Services, testimonials::Testimonials,
};
use crate::config::SiteConfig;
use crate::reveal::context::RevealProvider;
use crate::scroll::hook::use_scroll_progress;

const PAGE_STYLE: &str = r#"
    * { box-sizing: border-box; }
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background: #111827; }
    [dir="rtl"] body { font-family: "Noto Kufi Arabic", Tahoma, sans-serif; }
    .serif { font-family: Georgia, "Times New Roman", serif; }
    .italic { font-style: italic; font-weight: 400; }
    .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; position: relative; }
    .split { display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; align-items: center; }
    .lead { font-size: 1.125rem; color: #374151; }
    .muted { color: #6b7280; }
    .eyebrow { display: block; font-size: 0.875rem; font-weight: 600; letter-spacing: 0.2em; text-transform: uppercase; color: #1d4ed8; }
    .rounded-image { width: 100%; max-width: 32rem; min-height: 260px; object-fit: cover; border-radius: 1.5rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); background: #f3f4f6; }
    .pill-button { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.5rem; border-radius: 9999px; border: 1px solid #1d4ed8; background: #1d4ed8; color: #fff; font-weight: 600; cursor: pointer; transition: background 0.3s ease; }
    .pill-button:hover { background: #1e40af; }
    .pill-button.outline { background: rgba(255, 255, 255, 0.8); color: #1d4ed8; }
    .button-row { display: flex; flex-wrap: wrap; gap: 1rem; }

    .scroll-progress { position: fixed; top: 0; left: 0; right: 0; height: 3px; z-index: 60; background: transparent; }
    .scroll-progress-fill { height: 100%; background: linear-gradient(90deg, #3b82f6, #1d4ed8); transition: width 0.1s linear; }
    [dir="rtl"] .scroll-progress-fill { margin-inline-start: auto; }

    .language-switcher { display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; border-radius: 9999px; border: 1px solid rgba(59, 130, 246, 0.3); background: linear-gradient(90deg, #2563eb, #1d4ed8); color: #fff; font-size: 0.875rem; font-weight: 600; cursor: pointer; transition: transform 0.3s ease; }
    .language-switcher:hover { transform: scale(1.05); }

    .hero { position: relative; min-height: 100vh; display: flex; align-items: center; color: #fff; overflow: hidden; background: #111827; }
    .hero-slides { position: absolute; inset: 0; }
    .hero-slide { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; z-index: 0; }
    .hero-slide.active { z-index: 1; }
    .hero-overlay { position: absolute; inset: 0; z-index: 2; background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.7)); }
    .hero-content { position: relative; z-index: 3; width: 100%; max-width: 80rem; margin: 0 auto; padding: 5rem 1.5rem; text-align: center; display: flex; flex-direction: column; align-items: center; }
    .hero-kicker { color: #bfdbfe; font-size: 0.875rem; letter-spacing: 0.3em; text-transform: uppercase; }
    .hero-title { font-family: Georgia, serif; font-size: clamp(3rem, 8vw, 6rem); margin: 0 0 1.5rem; text-shadow: 0 2px 8px rgba(0, 0, 0, 0.9); }
    .hero-subtitle { font-size: 1.25rem; color: #e5e7eb; max-width: 42rem; }
    .hero-cta { margin-top: 2rem; padding: 1rem 2.5rem; border: none; border-radius: 9999px; background: #1d4ed8; color: #fff; font-size: 1.125rem; font-weight: 600; cursor: pointer; }
    .hero-indicators { position: absolute; bottom: 2rem; left: 0; right: 0; z-index: 3; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; display: flex; justify-content: space-between; color: #e5e7eb; font-size: 0.875rem; }
    .indicator { display: flex; align-items: center; gap: 0.5rem; }
    .indicator-line { width: 1px; height: 2rem; background: #9ca3af; }

    @keyframes fadeInUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: none; } }
    .fade-in-up { animation: fadeInUp 0.8s ease-out both; }
    .delay-300 { animation-delay: 300ms; transition-delay: 300ms; }
    .delay-500 { animation-delay: 500ms; transition-delay: 500ms; }
    .delay-1000 { animation-delay: 1000ms; transition-delay: 1000ms; }
    .delay-200 { transition-delay: 200ms; }
    .delay-400 { transition-delay: 400ms; }

    .reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease-out, transform 0.8s ease-out; }
    .reveal.from-start { transform: translateX(-40px); }
    .reveal.from-end { transform: translateX(40px); }
    [dir="rtl"] .reveal.from-start { transform: translateX(40px); }
    [dir="rtl"] .reveal.from-end { transform: translateX(-40px); }
    .reveal.revealed { opacity: 1; transform: none; }
    .tracked-section .fade-up { opacity: 0; transform: translateY(40px); transition: opacity 1s ease-out, transform 1s ease-out; }
    .tracked-section.visited .fade-up { opacity: 1; transform: none; }
    .fade-in-start, .fade-in-end { animation: fadeInUp 0.8s ease-out both; }

    .about, .services { padding: 5rem 0; background: #fff; }
    .pillars { display: flex; flex-wrap: wrap; gap: 3rem; margin-bottom: 4rem; }
    .pillar { text-align: center; }
    .pillar-kicker { font-size: 0.875rem; color: #9ca3af; font-style: italic; }
    .pillar-title { font-size: 1.125rem; font-weight: 600; letter-spacing: 0.05em; color: #374151; }
    .about h2 { font-size: 3rem; color: #111827; }

    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header h2 { font-size: 3rem; color: #111827; margin-bottom: 1rem; }
    .section-header .subheading { display: block; font-size: 1.5rem; font-weight: 400; color: #4b5563; }
    .card-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 4rem; }
    .card { background: #fff; border-radius: 1rem; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); padding: 2rem; text-align: center; }
    .card:hover { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); }
    .card h3 { font-size: 1.5rem; color: #111827; }
    .card p { color: #4b5563; }
    .card .footnote { font-size: 0.875rem; color: #6b7280; }
    .card .role { color: #2563eb; font-weight: 600; }
    .card-icon, .avatar { width: 4rem; height: 4rem; border-radius: 9999px; margin: 0 auto 1.5rem; display: flex; align-items: center; justify-content: center; }
    .avatar { width: 6rem; height: 6rem; }
    .blue { background: linear-gradient(135deg, #3b82f6, #2563eb); }
    .green { background: linear-gradient(135deg, #22c55e, #16a34a); }
    .purple { background: linear-gradient(135deg, #a855f7, #9333ea); }
    .glyph { width: 2rem; height: 2rem; background: #fff; border-radius: 0.25rem; transform: rotate(45deg); }
    .avatar-inner { width: 3rem; height: 3rem; border-radius: 9999px; background: #fff; display: flex; align-items: center; justify-content: center; }
    .avatar-dot { width: 1.5rem; height: 1.5rem; border-radius: 9999px; background: #3b82f6; }
    .offerings { text-align: start; font-size: 0.875rem; color: #4b5563; padding-inline-start: 1rem; }
    .banner { position: relative; height: 24rem; border-radius: 1rem; overflow: hidden; background: url('https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=1920&h=600&fit=crop') center / cover; }
    .banner-overlay { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; background: rgba(17, 24, 39, 0.6); color: #fff; }

    .approach { padding: 5rem 0; background: linear-gradient(to bottom, #fff, #f3f4f6); }
    .glass-card { backdrop-filter: blur(16px); background: rgba(255, 255, 255, 0.6); border: 1px solid #e5e7eb; border-radius: 1.5rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15); padding: 3rem; }
    .glass-card h3 { font-size: 2.25rem; color: #111827; }

    .sectors { position: relative; padding: 5rem 0; background: #111827; color: #fff; overflow: hidden; }
    .sectors-backdrop { position: absolute; inset: 0; opacity: 0.4; background: url('https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&w=1920&q=80') center / cover; }
    .sectors-intro { margin-bottom: 4rem; max-width: 42rem; color: #e5e7eb; }
    .sectors .eyebrow { color: #d1d5db; }
    .sector-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .sector-tile { position: relative; border-radius: 1rem; overflow: hidden; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3); }
    .sector-tile img { width: 100%; height: 16rem; object-fit: cover; transition: transform 0.7s ease; }
    .sector-tile:hover img { transform: scale(1.05); }
    .sector-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(17, 24, 39, 0.8), transparent); }
    .sector-caption { position: absolute; bottom: 0; left: 0; right: 0; padding: 1.5rem; }
    .sector-caption h4 { margin: 0; font-weight: 300; color: #d1d5db; }
    .sector-caption h3 { margin: 0; font-size: 1.875rem; }

    .team { padding: 5rem 0; background: #f3f4f6; }
    .team-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; max-width: 56rem; margin: 0 auto 4rem; }
    .testimonial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 4rem; }
    .testimonial { background: #fff; border-radius: 1rem; padding: 1.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .stars { color: #facc15; margin-bottom: 0.75rem; }
    .quote { color: #374151; font-style: italic; }
    .attribution { color: #6b7280; font-size: 0.875rem; }
    .partners { display: flex; flex-wrap: wrap; justify-content: center; gap: 3rem; color: #9ca3af; font-size: 1.5rem; font-weight: 700; }

    .contact { padding: 5rem 0; background: #111827; color: #e5e7eb; }
    .contact h2 { color: #fff; }
    .contact h4 { color: #fff; margin-bottom: 0.5rem; }
    .contact a { color: #93c5fd; }
    .map iframe { width: 100%; height: 22rem; border: 0; border-radius: 1rem; }

    .site-footer { padding: 6rem 0 3rem; background: linear-gradient(to bottom, #f3f4f6, #9ca3af); color: #374151; }
    .footer-brand { display: flex; align-items: center; gap: 1rem; font-size: 1.875rem; font-weight: 700; color: #1f2937; }
    .footer-brand .mark { width: 2.5rem; height: 2.5rem; transform: rotate(45deg); background: linear-gradient(135deg, #60a5fa, #2563eb); }
    .newsletter h3 { font-size: 1.125rem; letter-spacing: 0.05em; text-transform: uppercase; }
    .newsletter-form { display: flex; align-items: center; max-width: 36rem; padding: 0.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.7); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .newsletter-form input { flex: 1; border: none; background: transparent; padding: 0.75rem 1rem; font-size: 1.125rem; font-style: italic; outline: none; }
    .newsletter-form button { width: 3rem; height: 3rem; border: none; border-radius: 9999px; background: #1d4ed8; color: #fff; font-size: 1.5rem; cursor: pointer; }
    [dir="rtl"] .newsletter-form button { transform: scaleX(-1); }
    .newsletter-terms { display: flex; align-items: center; gap: 0.75rem; margin-top: 1rem; font-size: 0.875rem; color: #6b7280; }
    .form-error { color: #b91c1c; }
    .form-success { color: #15803d; }
    .footer-columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 1rem; }
    .footer-columns ul { list-style: none; padding: 0; font-size: 0.875rem; color: #4b5563; }
    .footer-columns a { color: inherit; }
    .copyright { border-top: 1px solid #d1d5db; margin-top: 2rem; padding-top: 2rem; text-align: center; font-size: 0.875rem; color: #4b5563; }
    .copyright .accent { color: #1d4ed8; }

    @media (max-width: 768px) {
        .split, .card-grid, .sector-grid, .team-grid, .testimonial-grid, .footer-columns { grid-template-columns: 1fr; gap: 2.5rem; }
        .hero-indicators { display: none; }
        .about h2, .section-header h2 { font-size: 2rem; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = &props.config;
    let scroll = use_scroll_progress(config.scroll.throttle_ms);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{ PAGE_STYLE }</style>
            <ProgressBar percent={scroll.percent} />
            <Nav scrolled={scroll.scrolled_past(config.scroll.nav_solid_after_px)} />
            <RevealProvider policy={config.reveal.clone()}>
                <Hero carousel={config.carousel.clone()} />
                <About />
                <Services />
                <Approach />
                <Sectors />
                <Testimonials />
                <Contact contact={config.contact.clone()} />
                <Footer contact={config.contact.clone()} />
            </RevealProvider>
        </div>
    }
}
