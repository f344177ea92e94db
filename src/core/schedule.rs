//! Frame scheduling decoupled from the display surface.
//!
//! The browser implementation wraps `requestAnimationFrame`; tests drive a
//! manual scheduler and pump ticks themselves.

/// Handle returned by a scheduler for a pending tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the request failed.
    fn request_tick(&mut self) -> Option<TickHandle>;
    fn cancel(&mut self, handle: TickHandle);
}

/// Re-arming frame loop: every delivered tick runs the frame body and asks
/// the scheduler for the next one.
#[derive(Debug)]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<TickHandle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = self.scheduler.request_tick();
        if self.pending.is_none() {
            log::warn!("[loop] scheduler refused the first tick");
            self.running = false;
        }
    }

    /// Handle a delivered tick: run `frame`, then re-arm. Ticks arriving
    /// after `stop` are ignored.
    pub fn on_tick(&mut self, frame: impl FnOnce()) {
        self.pending = None;
        if !self.running {
            return;
        }
        frame();
        self.frames += 1;
        self.pending = self.scheduler.request_tick();
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
