use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod reveal {
    pub mod context;
    pub mod observer;
    pub mod policy;
    pub mod tracker;
}
mod carousel {
    pub mod driver;
    pub mod hook;
}
mod scroll {
    pub mod anchor;
    pub mod hook;
    pub mod progress;
}
mod components {
    pub mod about;
    pub mod approach;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod language_switcher;
    pub mod nav;
    pub mod newsletter;
    pub mod progress_bar;
    pub mod reveal;
    pub mod sectors;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod legal;
}

use config::SiteConfig;
use i18n::{stored_language, Catalog, I18nProvider};
use pages::{
    home::Home,
    legal::{NotFound, PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(config: Rc<SiteConfig>, route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {config} /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
    pub catalog: Rc<Catalog>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let initial = stored_language().unwrap_or(props.config.default_language);
    let render = {
        let config = props.config.clone();
        move |route: Route| switch(config.clone(), route)
    };

    html! {
        <I18nProvider catalog={props.catalog.clone()} {initial}>
            <BrowserRouter>
                <Switch<Route> {render} />
            </BrowserRouter>
        </I18nProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = match SiteConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return;
        }
    };
    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        catalog: Rc::new(catalog),
    })
    .render();
}
