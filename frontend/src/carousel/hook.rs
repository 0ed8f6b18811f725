use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::driver::{CarouselAction, CarouselDriver};

/// Starts the slider on mount and advances it every `tick_interval_ms`.
///
/// The interval is cancelled when the component unmounts (dropping a gloo
/// `Interval` clears it), so no tick can land after teardown.
#[hook]
pub fn use_carousel(images: Rc<[String]>, tick_interval_ms: u32) -> UseReducerHandle<CarouselDriver> {
    let driver = use_reducer(CarouselDriver::new);

    {
        let dispatcher = driver.dispatcher();
        use_effect_with_deps(
            move |(images, tick_interval_ms): &(Rc<[String]>, u32)| {
                let tick_interval_ms = *tick_interval_ms;
                dispatcher.dispatch(CarouselAction::Start {
                    images: images.clone(),
                    tick_interval_ms,
                });

                let interval = (!images.is_empty() && tick_interval_ms > 0).then(|| {
                    let dispatcher = dispatcher.clone();
                    Interval::new(tick_interval_ms, move || {
                        dispatcher.dispatch(CarouselAction::Tick);
                    })
                });

                move || {
                    drop(interval);
                    dispatcher.dispatch(CarouselAction::Stop);
                }
            },
            (images, tick_interval_ms),
        );
    }

    driver
}
