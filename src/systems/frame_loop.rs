//! Host frame loop
//!
//! An offline stand-in for a display refresh callback: hands out monotonic
//! frame handles, forgets cancelled ones, and fires the pending frame on
//! demand.

use std::collections::VecDeque;

use isoart_render::{DrawingSurface, FrameHandle, FrameScheduler, Gallery};

/// Queue of pending frames
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: VecDeque<FrameHandle>,
}

impl FrameQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames currently waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// True if `handle` is waiting to fire
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Take the oldest pending frame
    pub fn pop(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// Fire one pending frame into the gallery
    ///
    /// Returns false when nothing was pending or the gallery ignored the frame.
    pub fn step(&mut self, gallery: &mut Gallery, surface: &mut dyn DrawingSurface) -> bool {
        match self.pop() {
            Some(handle) => gallery.frame(handle, surface, self),
            None => false,
        }
    }

    /// Fire frames until `frames` have been drawn or nothing is pending
    ///
    /// `on_frame` runs after every drawn frame with its index. Returns the
    /// number of frames drawn.
    pub fn run<S, F>(&mut self, gallery: &mut Gallery, surface: &mut S, frames: u32, mut on_frame: F) -> u32
    where
        S: DrawingSurface,
        F: FnMut(u32, &S),
    {
        let mut drawn = 0;
        while drawn < frames {
            let Some(handle) = self.pop() else {
                break;
            };
            if gallery.frame(handle, surface, self) {
                on_frame(drawn, surface);
                drawn += 1;
            }
        }
        log::debug!("Frame loop drew {} of {} frames", drawn, frames);
        drawn
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule_next_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push_back(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
