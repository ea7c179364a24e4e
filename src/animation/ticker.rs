use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use super::typing::{TypingFrame, TypingSession};

pub type Tick = Box<dyn FnOnce()>;

pub trait TickHandle {
    fn cancel(self);
}

/// Runs a single callback after a delay.
pub trait TickScheduler: 'static {
    type Handle: TickHandle + 'static;

    fn schedule(&self, delay_ms: u32, tick: Tick) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
pub struct TimeoutScheduler;

impl TickHandle for Timeout {
    fn cancel(self) {
        drop(Timeout::cancel(self));
    }
}

impl TickScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, tick: Tick) -> Timeout {
        Timeout::new(delay_ms, tick)
    }
}

struct LoopState<S: TickScheduler> {
    session: TypingSession,
    scheduler: S,
    pending: Option<S::Handle>,
    on_frame: Rc<dyn Fn(TypingFrame)>,
    stopped: bool,
}

/// Self-rescheduling driver for a [`TypingSession`]. Only one tick is ever pending.
pub struct AnimationLoop<S: TickScheduler> {
    state: Rc<RefCell<LoopState<S>>>,
}

impl<S: TickScheduler> AnimationLoop<S> {
    pub fn start(scheduler: S, session: TypingSession, on_frame: impl Fn(TypingFrame) + 'static) -> Self {
        let delay = session.start_delay();
        let state = Rc::new(RefCell::new(LoopState {
            session,
            scheduler,
            pending: None,
            on_frame: Rc::new(on_frame),
            stopped: false,
        }));
        schedule(&state, delay);
        Self { state }
    }

    /// Cancels the pending tick. The loop cannot be restarted.
    pub fn stop(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.stopped = true;
            state.pending.take()
        };
        if let Some(handle) = pending {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        let state = self.state.borrow();
        !state.stopped && state.pending.is_some()
    }
}

fn schedule<S: TickScheduler>(state: &Rc<RefCell<LoopState<S>>>, delay_ms: u32) {
    let weak = Rc::downgrade(state);
    let handle = state.borrow().scheduler.schedule(
        delay_ms,
        Box::new(move || {
            if let Some(state) = weak.upgrade() {
                tick(&state);
            }
        }),
    );
    state.borrow_mut().pending = Some(handle);
}

fn tick<S: TickScheduler>(state: &Rc<RefCell<LoopState<S>>>) {
    let (frame, delay, on_frame) = {
        let mut state = state.borrow_mut();
        if state.stopped {
            return;
        }
        state.pending = None;
        let delay = state.session.advance();
        (state.session.frame(), delay, Rc::clone(&state.on_frame))
    };

    // on_frame may stop the loop
    on_frame(frame);

    if !state.borrow().stopped {
        schedule(state, delay);
    }
}

#[cfg(test)]
pub use virtual_clock::VirtualClock;

#[cfg(test)]
mod virtual_clock {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::{Tick, TickHandle, TickScheduler};

    struct Scheduled {
        due: u64,
        id: u64,
        tick: Tick,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_id: u64,
        queue: Vec<Scheduled>,
    }

    /// Manually advanced time for driving timer chains in tests.
    #[derive(Clone, Default)]
    pub struct VirtualClock {
        state: Rc<RefCell<ClockState>>,
    }

    pub struct VirtualHandle {
        id: u64,
        state: Weak<RefCell<ClockState>>,
    }

    impl VirtualClock {
        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.state.borrow().queue.len()
        }

        /// Runs every tick due within the next `ms`, in due order.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let due = state
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| entry.due <= target)
                        .min_by_key(|(_, entry)| (entry.due, entry.id))
                        .map(|(index, _)| index);
                    match due {
                        Some(index) => {
                            let entry = state.queue.remove(index);
                            state.now = entry.due;
                            Some(entry.tick)
                        }
                        None => {
                            state.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(tick) => tick(),
                    None => break,
                }
            }
        }
    }

    impl TickHandle for VirtualHandle {
        fn cancel(self) {
            if let Some(state) = self.state.upgrade() {
                state.borrow_mut().queue.retain(|entry| entry.id != self.id);
            }
        }
    }

    impl TickScheduler for VirtualClock {
        type Handle = VirtualHandle;

        fn schedule(&self, delay_ms: u32, tick: Tick) -> VirtualHandle {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + u64::from(delay_ms);
            state.queue.push(Scheduled { due, id, tick });
            VirtualHandle {
                id,
                state: Rc::downgrade(&self.state),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypewriterConfig;

    fn recording_loop(clock: &VirtualClock) -> (AnimationLoop<VirtualClock>, Rc<RefCell<Vec<TypingFrame>>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        let animation = AnimationLoop::start(
            clock.clone(),
            TypingSession::new(TypewriterConfig::default()),
            move |frame| sink.borrow_mut().push(frame),
        );
        (animation, frames)
    }

    #[test]
    fn waits_for_start_delay() {
        let clock = VirtualClock::default();
        let (_animation, frames) = recording_loop(&clock);

        clock.advance(499);
        assert!(frames.borrow().is_empty());

        clock.advance(1);
        assert_eq!(frames.borrow().last().map(|f| f.text()), Some("F".to_string()));
    }

    #[test]
    fn lead_string_is_complete_after_head_duration() {
        let clock = VirtualClock::default();
        let (_animation, frames) = recording_loop(&clock);

        // first char at 500, then one every 80ms
        clock.advance(500 + 80 * 10);
        assert_eq!(frames.borrow().last().map(|f| f.text()), Some("Foundation ".to_string()));
        assert_eq!(frames.borrow().len(), 11);
    }

    #[test]
    fn content_clears_after_dwell_and_restarts_after_pause() {
        let clock = VirtualClock::default();
        let (_animation, frames) = recording_loop(&clock);

        // head 500..=1300, switch at 1380, rest 1580..=2140, switch at 2220,
        // exploration 2520..=4520, dwell starts at 4600
        clock.advance(4600);
        assert_eq!(
            frames.borrow().last().map(|f| f.text()),
            Some("Foundation built on \nExploration, Play and Care".to_string())
        );

        clock.advance(2000);
        assert!(frames.borrow().last().map(|f| f.is_empty()).unwrap_or(false));

        clock.advance(999);
        assert!(frames.borrow().last().map(|f| f.is_empty()).unwrap_or(false));

        clock.advance(1);
        assert_eq!(frames.borrow().last().map(|f| f.text()), Some("F".to_string()));
    }

    #[test]
    fn cycles_repeat_identically() {
        let clock = VirtualClock::default();
        let (_animation, frames) = recording_loop(&clock);

        clock.advance(60_000);

        let frames = frames.borrow();
        let cycles: Vec<&[TypingFrame]> = frames.split(|frame| frame.is_empty()).collect();
        assert!(cycles.len() > 3);
        assert_eq!(cycles[0], cycles[1]);
        assert_eq!(cycles[1], cycles[2]);
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let clock = VirtualClock::default();
        let (animation, frames) = recording_loop(&clock);

        clock.advance(700);
        assert!(animation.is_running());
        let seen = frames.borrow().len();

        animation.stop();
        assert!(!animation.is_running());
        assert_eq!(clock.pending(), 0);

        clock.advance(10_000);
        assert_eq!(frames.borrow().len(), seen);
    }

    #[test]
    fn stopping_from_inside_a_frame_callback_ends_the_chain() {
        let clock = VirtualClock::default();
        let handle: Rc<RefCell<Option<AnimationLoop<VirtualClock>>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(RefCell::new(0));

        let animation = {
            let handle = Rc::clone(&handle);
            let count = Rc::clone(&count);
            AnimationLoop::start(
                clock.clone(),
                TypingSession::new(TypewriterConfig::default()),
                move |_| {
                    *count.borrow_mut() += 1;
                    if let Some(animation) = handle.borrow().as_ref() {
                        animation.stop();
                    }
                },
            )
        };
        *handle.borrow_mut() = Some(animation);

        clock.advance(5_000);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(clock.pending(), 0);
    }
}
