//! Timer-driven word advancement.
//!
//! The scheduler never sleeps. It keeps at most one pending tick with an
//! absolute due time, and the owner calls [`Scheduler::poll`] with the
//! current monotonic time. Cancelling a tick is just dropping it, so a
//! cancelled tick can never fire.

use std::num::NonZeroU32;

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No document loaded.
    Idle,
    Paused,
    Playing,
    /// Paused on the last word.
    Finished,
}

/// Identifies one scheduled tick. Every reschedule issues a fresh handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTick {
    handle: TickHandle,
    due_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was due.
    Idle,
    Advanced(usize),
    /// The tick found the cursor on the last word and stopped playback.
    ReachedEnd(usize),
}

pub fn interval_ms(wpm: NonZeroU32) -> u64 {
    60_000 / u64::from(wpm.get())
}

#[derive(Debug)]
pub struct Scheduler {
    word_count: usize,
    current_index: usize,
    wpm: NonZeroU32,
    playing: bool,
    pending: Option<PendingTick>,
    next_handle: u64,
}

impl Scheduler {
    pub fn new(wpm: NonZeroU32) -> Self {
        Self {
            word_count: 0,
            current_index: 0,
            wpm,
            playing: false,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.word_count == 0 {
            PlaybackState::Idle
        } else if self.playing {
            PlaybackState::Playing
        } else if self.current_index + 1 >= self.word_count {
            PlaybackState::Finished
        } else {
            PlaybackState::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn wpm(&self) -> NonZeroU32 {
        self.wpm
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.map(|p| p.due_ms)
    }

    pub fn pending_handle(&self) -> Option<TickHandle> {
        self.pending.map(|p| p.handle)
    }

    /// Starts over on a new document, paused on the first word.
    pub fn load(&mut self, word_count: usize) {
        self.restore(word_count, 0);
    }

    /// Like [`Scheduler::load`] but resumes at `index`, clamped into range.
    pub fn restore(&mut self, word_count: usize, index: usize) {
        self.cancel();
        self.playing = false;
        self.word_count = word_count;
        self.current_index = self.clamp(index);
        debug!("playback loaded: {} words at {}", word_count, self.current_index);
    }

    pub fn play(&mut self, now_ms: u64) -> bool {
        if self.playing || self.word_count == 0 || self.current_index + 1 >= self.word_count {
            return false;
        }
        self.playing = true;
        self.schedule(now_ms);
        debug!("playback started at {}", self.current_index);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.playing = false;
        self.cancel();
        debug!("playback paused at {}", self.current_index);
        true
    }

    /// Fires the pending tick if it is due. At most one tick fires per call.
    pub fn poll(&mut self, now_ms: u64) -> TickOutcome {
        match self.pending {
            Some(tick) => self.fire(tick.handle, now_ms),
            None => TickOutcome::Idle,
        }
    }

    /// Fires the tick identified by `handle`. A handle that was cancelled or
    /// superseded since it was issued is ignored, as is one not yet due.
    pub fn fire(&mut self, handle: TickHandle, now_ms: u64) -> TickOutcome {
        match self.pending {
            Some(tick) if tick.handle == handle && now_ms >= tick.due_ms => {}
            _ => return TickOutcome::Idle,
        }
        self.pending = None;

        if self.current_index + 1 >= self.word_count {
            self.playing = false;
            debug!("playback reached the last word");
            return TickOutcome::ReachedEnd(self.current_index);
        }

        self.current_index += 1;
        self.schedule(now_ms);
        TickOutcome::Advanced(self.current_index)
    }

    /// Changes the rate. A tick already pending keeps its due time; the new
    /// interval applies from the next reschedule onward.
    pub fn set_wpm(&mut self, wpm: NonZeroU32) {
        self.wpm = wpm;
        if let Some(stale) = self.pending.take() {
            self.pending = Some(PendingTick {
                handle: self.issue_handle(),
                due_ms: stale.due_ms,
            });
        }
    }

    /// Moves the cursor without touching the play state. While playing the
    /// new word gets a full interval before the next advance.
    pub fn seek(&mut self, index: usize, now_ms: u64) {
        if self.word_count == 0 {
            return;
        }
        self.current_index = self.clamp(index);
        if self.playing {
            self.schedule(now_ms);
        }
    }

    pub fn step_back(&mut self, now_ms: u64) {
        self.seek(self.current_index.saturating_sub(1), now_ms);
    }

    pub fn step_forward(&mut self, now_ms: u64) {
        self.seek(self.current_index.saturating_add(1), now_ms);
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.playing = false;
        self.current_index = 0;
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.word_count.saturating_sub(1))
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    fn schedule(&mut self, now_ms: u64) {
        self.pending = Some(PendingTick {
            handle: self.issue_handle(),
            due_ms: now_ms + interval_ms(self.wpm),
        });
    }

    fn issue_handle(&mut self) -> TickHandle {
        self.next_handle += 1;
        TickHandle(self.next_handle)
    }
}
