use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::scroll::coordinator::SuspendGuard;

pub const SCROLL_DURATION_MS: f64 = 1000.0;
const FRAME_MS: u32 = 16;

/// Ease-in/ease-out curve used for in-page navigation.
pub fn swing(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    0.5 - (p * PI).cos() / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to, duration_ms: SCROLL_DURATION_MS }
    }

    /// Viewport offset `elapsed_ms` after the start. Lands exactly on `to` once done.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        self.from + (self.to - self.from) * swing(elapsed_ms / self.duration_ms)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

/// Where a navigation click should land for a section starting at `section_top`.
pub fn scroll_target(section_top: f64, extra_padding: f64) -> f64 {
    (section_top - extra_padding).max(0.0)
}

/// A running viewport animation. Dropping the handle interrupts it; either way the
/// suspend guard is released on the run's next step, which puts classification back on.
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The state an animation task steps through. Owns the suspend guard until the
/// animation lands or its handle is dropped.
pub struct AnimationRun {
    animation: ScrollAnimation,
    guard: Option<SuspendGuard>,
    cancelled: Rc<Cell<bool>>,
}

impl AnimationRun {
    pub fn start(animation: ScrollAnimation, guard: SuspendGuard) -> (Self, AnimationHandle) {
        let cancelled = Rc::new(Cell::new(false));
        let run = Self {
            animation,
            guard: Some(guard),
            cancelled: cancelled.clone(),
        };
        (run, AnimationHandle { cancelled })
    }

    /// Position to scroll to `elapsed_ms` in, or `None` once the run is over. The
    /// guard is dropped on the step that lands on the target or notices the
    /// interruption.
    pub fn tick(&mut self, elapsed_ms: f64) -> Option<f64> {
        self.guard.as_ref()?;
        if self.cancelled.get() {
            log::debug!("Scroll animation interrupted");
            self.guard = None;
            return None;
        }
        if self.animation.is_done(elapsed_ms) {
            self.guard = None;
        }
        Some(self.animation.position_at(elapsed_ms))
    }

    pub fn is_finished(&self) -> bool {
        self.guard.is_none()
    }
}

fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Scrolls the window according to `animation`, holding `guard` for the duration.
pub fn animate_window_scroll(animation: ScrollAnimation, guard: SuspendGuard) -> AnimationHandle {
    let (mut run, handle) = AnimationRun::start(animation, guard);

    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let started = now_ms();
        while let Some(position) = run.tick(now_ms() - started) {
            window.scroll_to_with_x_and_y(0.0, position);
            if run.is_finished() {
                break;
            }
            TimeoutFuture::new(FRAME_MS).await;
        }
    });

    handle
}
