use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::Window;
use yew::prelude::*;

use super::progress::{Gate, ScrollGeometry, ScrollProgress, Throttle};

fn measure(window: &Window) -> Option<ScrollGeometry> {
    let document = window.document()?.document_element()?;
    Some(ScrollGeometry {
        offset: window.scroll_y().ok()?,
        document_height: f64::from(document.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Tracks scroll position through a throttled window `scroll` listener.
///
/// Measured once on mount so a page restored mid-scroll starts correct. Events
/// dropped by the throttle leave one trailing measure behind, so the meter
/// settles on where scrolling stopped.
#[hook]
pub fn use_scroll_progress(throttle_ms: u32) -> UseReducerHandle<ScrollProgress> {
    let progress = use_reducer(ScrollProgress::default);

    {
        let dispatcher = progress.dispatcher();
        use_effect_with_deps(
            move |throttle_ms: &u32| {
                let throttle = Rc::new(RefCell::new(Throttle::new(*throttle_ms)));
                let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let listener = web_sys::window().map(|window| {
                    if let Some(geometry) = measure(&window) {
                        dispatcher.dispatch(geometry);
                    }

                    let scroll_window = window.clone();
                    let trailing = trailing.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let gate = throttle.borrow_mut().gate(Date::now());
                        match gate {
                            Gate::Fire => {
                                if let Some(geometry) = measure(&scroll_window) {
                                    dispatcher.dispatch(geometry);
                                }
                            }
                            Gate::Trail(delay_ms) => {
                                let window = scroll_window.clone();
                                let dispatcher = dispatcher.clone();
                                let throttle = throttle.clone();
                                // The previous timeout has already fired by now.
                                *trailing.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                                    throttle.borrow_mut().fire_trailing(Date::now());
                                    if let Some(geometry) = measure(&window) {
                                        dispatcher.dispatch(geometry);
                                    }
                                }));
                            }
                            Gate::Skip => {}
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("could not attach scroll listener: {:?}", e);
                    }
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("could not detach scroll listener: {:?}", e);
                        }
                    }
                    // Dropping a pending Timeout cancels it.
                    trailing.borrow_mut().take();
                }
            },
            throttle_ms,
        );
    }

    progress
}
