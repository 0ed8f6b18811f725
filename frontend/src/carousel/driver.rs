use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one image")]
    NoImages,
    #[error("carousel tick interval must be greater than zero")]
    ZeroInterval,
}

/// Hero slider state. Advances one slide per tick and wraps around; it never
/// moves backwards on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselDriver {
    images: Rc<[String]>,
    current: usize,
    tick_interval_ms: u32,
    running: bool,
}

/// What the renderer needs to draw one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<'a> {
    pub index: usize,
    pub src: &'a str,
    pub active: bool,
}

impl Default for CarouselDriver {
    fn default() -> Self {
        Self {
            images: Rc::from(Vec::new()),
            current: 0,
            tick_interval_ms: 0,
            running: false,
        }
    }
}

impl CarouselDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, images: Rc<[String]>, tick_interval_ms: u32) -> Result<(), CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::NoImages);
        }
        if tick_interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        self.images = images;
        self.current = 0;
        self.tick_interval_ms = tick_interval_ms;
        self.running = true;
        Ok(())
    }

    pub fn tick(&mut self) -> usize {
        self.advance(1)
    }

    /// Same as `n` ticks in a row.
    pub fn advance(&mut self, n: u64) -> usize {
        if self.running {
            let len = self.images.len() as u64;
            self.current = ((self.current as u64 + n % len) % len) as usize;
        }
        self.current
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn opacity(&self, index: usize) -> f64 {
        if index == self.current {
            1.0
        } else {
            0.0
        }
    }

    pub fn slides(&self) -> impl Iterator<Item = Slide<'_>> {
        self.images.iter().enumerate().map(move |(index, src)| Slide {
            index,
            src: src.as_str(),
            active: index == self.current,
        })
    }
}

pub enum CarouselAction {
    Start { images: Rc<[String]>, tick_interval_ms: u32 },
    Tick,
    Stop,
}

impl Reducible for CarouselDriver {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Start {
                images,
                tick_interval_ms,
            } => match next.start(images, tick_interval_ms) {
                Ok(()) => info!(
                    "carousel started with {} slides every {}ms",
                    next.len(),
                    tick_interval_ms
                ),
                Err(e) => {
                    warn!("carousel not started: {}", e);
                    return self;
                }
            },
            CarouselAction::Tick => {
                if !next.running || next.len() < 2 {
                    return self;
                }
                next.tick();
            }
            CarouselAction::Stop => {
                if !next.running {
                    return self;
                }
                next.stop();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn images(n: usize) -> Rc<[String]> {
        (0..n).map(|i| format!("/img/{}.jpg", i)).collect()
    }

    fn started(n: usize) -> CarouselDriver {
        let mut driver = CarouselDriver::new();
        driver.start(images(n), 4000).unwrap();
        driver
    }

    #[test]
    fn single_image_stays_put() {
        let mut driver = started(1);
        assert_eq!(driver.tick(), 0);
    }

    #[test]
    fn three_images_wrap() {
        let mut driver = started(3);
        for _ in 0..3 {
            driver.tick();
        }
        assert_eq!(driver.current_index(), 0);
        driver.tick();
        assert_eq!(driver.current_index(), 1);
    }

    #[test]
    fn n_ticks_equal_n_mod_len() {
        for len in 1..=6usize {
            let mut ticked = started(len);
            for n in 0..40u64 {
                assert_eq!(ticked.current_index(), (n % len as u64) as usize);
                ticked.tick();
            }
        }
    }

    #[test]
    fn advance_handles_huge_counts() {
        let mut driver = started(5);
        assert_eq!(driver.advance(u64::MAX), (u64::MAX % 5) as usize);
        let mut driver = started(5);
        driver.tick();
        assert_eq!(driver.advance(u64::MAX), ((1 + u64::MAX % 5) % 5) as usize);
    }

    #[test]
    fn empty_images_are_rejected() {
        let mut driver = CarouselDriver::new();
        assert_eq!(driver.start(images(0), 4000), Err(CarouselError::NoImages));
        assert!(!driver.is_running());
        assert_eq!(driver.tick(), 0);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut driver = CarouselDriver::new();
        assert_eq!(driver.start(images(2), 0), Err(CarouselError::ZeroInterval));
    }

    #[test]
    fn stop_is_idempotent_and_freezes_index() {
        let mut idle = CarouselDriver::new();
        idle.stop();
        assert_eq!(idle.current_index(), 0);

        let mut driver = started(4);
        driver.tick();
        driver.tick();
        driver.stop();
        driver.stop();
        assert_eq!(driver.current_index(), 2);

        // A late timer firing after teardown.
        driver.tick();
        assert_eq!(driver.current_index(), 2);
    }

    #[test]
    fn only_current_slide_is_opaque() {
        let mut driver = started(3);
        driver.tick();
        let active: Vec<bool> = driver.slides().map(|s| s.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(driver.opacity(1), 1.0);
        assert_eq!(driver.opacity(0), 0.0);
        assert_eq!(driver.opacity(2), 0.0);
    }

    #[test]
    fn restart_goes_back_to_first_slide() {
        let mut driver = started(3);
        driver.tick();
        driver.start(images(2), 1000).unwrap();
        assert_eq!(driver.current_index(), 0);
        assert_eq!(driver.tick_interval_ms(), 1000);
    }

    #[test]
    fn reducer_ignores_ticks_when_stopped() {
        let state = Rc::new(CarouselDriver::new());
        let state = state.reduce(CarouselAction::Start {
            images: images(3),
            tick_interval_ms: 4000,
        });
        let state = state.reduce(CarouselAction::Tick);
        assert_eq!(state.current_index(), 1);

        let state = state.reduce(CarouselAction::Stop);
        let after = state.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.current_index(), 1);
    }

    #[test]
    fn reducer_rejects_empty_start() {
        let state = Rc::new(CarouselDriver::new());
        let after = state.clone().reduce(CarouselAction::Start {
            images: images(0),
            tick_interval_ms: 4000,
        });
        assert!(Rc::ptr_eq(&state, &after));
    }
}
