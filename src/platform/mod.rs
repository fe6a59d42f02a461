//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - The animation-frame loop and its cancellation
//! - Host page lookups (canvas, 2D context)
//! - Outbound completion messages

#[cfg(target_arch = "wasm32")]
pub mod web;

use thiserror::Error;

use crate::sim::GamePhase;

/// Host setup failures. None of them are recoverable: the game stays inert.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("canvas has no 2d context")]
    NoContext2d,
    #[error("javascript error: {0}")]
    Js(String),
}

/// One-shot frame callbacks (requestAnimationFrame on the web)
pub trait FrameScheduler {
    type Handle: Copy;

    /// Ask for one more frame callback
    fn request(&mut self) -> Option<Self::Handle>;
    /// Drop a pending callback
    fn cancel(&mut self, handle: Self::Handle);
}

/// Keeps at most one frame request pending, and only while playing
///
/// The pending request is cancelled when the session leaves `Playing` and
/// when the loop is dropped, so no frame fires against a torn-down game.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Mark the pending request as spent; call first thing in a frame callback
    pub fn frame_fired(&mut self) {
        self.pending = None;
    }

    /// Acquire a frame while playing, release it otherwise
    pub fn sync(&mut self, phase: GamePhase) {
        match (phase == GamePhase::Playing, self.pending) {
            (true, None) => {
                self.pending = self.scheduler.request();
                if self.pending.is_none() {
                    log::warn!("Frame request refused; simulation paused");
                }
            }
            (false, Some(_)) => self.stop(),
            _ => {}
        }
    }

    /// Cancel any pending frame
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
            log::debug!("Frame loop stopped");
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts outstanding requests through a shared ledger
    #[derive(Default, Clone)]
    struct FakeScheduler {
        next: u32,
        live: Rc<RefCell<Vec<u32>>>,
        refuse: bool,
    }

    impl FrameScheduler for FakeScheduler {
        type Handle = u32;

        fn request(&mut self) -> Option<u32> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            self.live.borrow_mut().push(self.next);
            Some(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            self.live.borrow_mut().retain(|h| *h != handle);
        }
    }

    #[test]
    fn test_acquire_only_while_playing() {
        let sched = FakeScheduler::default();
        let live = sched.live.clone();
        let mut frames = FrameLoop::new(sched);

        frames.sync(GamePhase::Waiting);
        assert!(!frames.is_running());

        frames.sync(GamePhase::Playing);
        frames.sync(GamePhase::Playing);
        assert!(frames.is_running());
        assert_eq!(live.borrow().len(), 1);

        frames.sync(GamePhase::GameOver);
        assert!(!frames.is_running());
        assert!(live.borrow().is_empty());
    }

    #[test]
    fn test_frame_fired_rearms() {
        let sched = FakeScheduler::default();
        let live = sched.live.clone();
        let mut frames = FrameLoop::new(sched);

        frames.sync(GamePhase::Playing);
        // The browser consumed the request
        live.borrow_mut().clear();
        frames.frame_fired();
        assert!(!frames.is_running());

        frames.sync(GamePhase::Playing);
        assert_eq!(*live.borrow(), vec![2]);
    }

    #[test]
    fn test_drop_cancels_pending() {
        let sched = FakeScheduler::default();
        let live = sched.live.clone();
        {
            let mut frames = FrameLoop::new(sched);
            frames.sync(GamePhase::Playing);
            assert_eq!(live.borrow().len(), 1);
        }
        assert!(live.borrow().is_empty());
    }

    #[test]
    fn test_resumes_after_stop() {
        let sched = FakeScheduler::default();
        let live = sched.live.clone();
        let mut frames = FrameLoop::new(sched);

        frames.sync(GamePhase::Playing);
        frames.stop();
        assert!(!frames.is_running());
        assert!(live.borrow().is_empty());

        // Still playing when the page comes back
        frames.sync(GamePhase::Playing);
        assert!(frames.is_running());
        assert_eq!(*live.borrow(), vec![2]);
    }

    #[test]
    fn test_refused_request() {
        let sched = FakeScheduler {
            refuse: true,
            ..Default::default()
        };
        let mut frames = FrameLoop::new(sched);
        frames.sync(GamePhase::Playing);
        assert!(!frames.is_running());
    }
}
