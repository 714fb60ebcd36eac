//! Timer-driven animations.
//!
//! An [`Animation`] is a plain state machine: every call to `tick` produces
//! the value to render and how long to wait before the next call. [`start`]
//! runs one on browser timers; the returned [`TickerHandle`] stops it when
//! cancelled or dropped. Tests drive the same state machines through
//! `testing::VirtualClock` without touching real time.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

pub struct Tick<T> {
    pub output: T,
    /// Delay before the next tick in ms, `None` once the animation is over.
    pub next: Option<u32>,
}

pub trait Animation: 'static {
    type Output: 'static;

    fn tick(&mut self) -> Tick<Self::Output>;
}

/// Cancels the running animation when dropped.
pub struct TickerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start<A: Animation>(
    mut animation: A,
    first_delay: u32,
    on_frame: Callback<A::Output>,
) -> TickerHandle {
    let cancelled = Rc::new(Cell::new(false));
    let flag = cancelled.clone();

    spawn_local(async move {
        let mut delay = first_delay;
        loop {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
            if flag.get() {
                debug!("Animation cancelled");
                break;
            }
            let Tick { output, next } = animation.tick();
            on_frame.emit(output);
            match next {
                Some(ms) => delay = ms,
                None => break,
            }
        }
    });

    TickerHandle { cancelled }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Animation, Tick};

    /// Runs an animation against a simulated clock.
    pub struct VirtualClock<A: Animation> {
        animation: A,
        now: u64,
        due: Option<u64>,
    }

    impl<A: Animation> VirtualClock<A> {
        pub fn new(animation: A, first_delay: u32) -> Self {
            Self {
                animation,
                now: 0,
                due: Some(first_delay as u64),
            }
        }

        /// Moves time forward by `ms`, returning every frame that fired
        /// together with the time it fired at.
        pub fn advance(&mut self, ms: u64) -> Vec<(u64, A::Output)> {
            let until = self.now + ms;
            let mut frames = Vec::new();
            while let Some(at) = self.due {
                if at > until {
                    break;
                }
                frames.push((at, self.fire(at)));
            }
            self.now = until;
            frames
        }

        /// Fires the next `count` frames regardless of their timing.
        pub fn frames(&mut self, count: usize) -> Vec<A::Output> {
            let mut frames = Vec::with_capacity(count);
            for _ in 0..count {
                match self.due {
                    Some(at) => {
                        frames.push(self.fire(at));
                        self.now = at;
                    }
                    None => break,
                }
            }
            frames
        }

        pub fn is_finished(&self) -> bool {
            self.due.is_none()
        }

        fn fire(&mut self, at: u64) -> A::Output {
            let Tick { output, next } = self.animation.tick();
            self.due = next.map(|ms| at + ms as u64);
            output
        }
    }
}
