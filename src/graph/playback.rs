//! Progressive reveal of a spread result, one node per tick.
//!
//! [`PlaybackState`] is a plain value whose transitions return the next
//! value. [`PlaybackController`] owns the loaded result, the current state
//! and at most one pending tick on an injected [`Scheduler`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use log::debug;

use super::scheduler::Scheduler;
use super::types::SpreadResult;
use super::visible::{VisibleSubgraph, visible};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
	#[default]
	Idle,
	Running,
	Paused,
	Completed,
}

/// Reveal cursor over a result of `len` nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
	len: usize,
	reveal_index: usize,
	status: PlaybackStatus,
}

impl PlaybackState {
	/// Fresh state for a newly loaded result.
	pub fn loaded(len: usize) -> Self {
		Self {
			len,
			reveal_index: 0,
			status: PlaybackStatus::Idle,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn status(&self) -> PlaybackStatus {
		self.status
	}

	pub fn is_running(&self) -> bool {
		self.status == PlaybackStatus::Running
	}

	/// `None` when there are no nodes to reveal.
	pub fn reveal_index(&self) -> Option<usize> {
		(self.len > 0).then_some(self.reveal_index)
	}

	/// Number of nodes currently shown.
	pub fn revealed(&self) -> usize {
		if self.len == 0 { 0 } else { self.reveal_index + 1 }
	}

	fn last(&self) -> Option<usize> {
		self.len.checked_sub(1)
	}

	fn completed(self, last: usize) -> Self {
		Self {
			reveal_index: last,
			status: PlaybackStatus::Completed,
			..self
		}
	}

	/// Begin or resume from `Idle`/`Paused`. A cursor already on the last
	/// node completes without ticking.
	pub fn start(self) -> Self {
		match (self.status, self.last()) {
			(PlaybackStatus::Idle | PlaybackStatus::Paused, Some(last)) => {
				if self.reveal_index >= last {
					self.completed(last)
				} else {
					Self {
						status: PlaybackStatus::Running,
						..self
					}
				}
			}
			_ => self,
		}
	}

	pub fn pause(self) -> Self {
		match self.status {
			PlaybackStatus::Running => Self {
				status: PlaybackStatus::Paused,
				..self
			},
			_ => self,
		}
	}

	/// Reveal everything at once.
	pub fn reset(self) -> Self {
		match self.last() {
			Some(last) => self.completed(last),
			None => self,
		}
	}

	/// Rewind to the origin and run again, from any state.
	pub fn replay(self) -> Self {
		match self.last() {
			Some(0) => self.completed(0),
			Some(_) => Self {
				reveal_index: 0,
				status: PlaybackStatus::Running,
				..self
			},
			None => self,
		}
	}

	/// Advance one node. Only a running cursor moves.
	pub fn tick(self) -> Self {
		let Some(last) = self.last() else {
			return self;
		};
		if self.status != PlaybackStatus::Running {
			return self;
		}
		let next = (self.reveal_index + 1).min(last);
		if next == last {
			self.completed(last)
		} else {
			Self {
				reveal_index: next,
				..self
			}
		}
	}
}

/// A result together with the playback state it is being shown at.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackFrame {
	pub result: Arc<SpreadResult>,
	pub state: PlaybackState,
}

impl PlaybackFrame {
	pub fn visible(&self) -> VisibleSubgraph<'_> {
		visible(&self.result, self.state.reveal_index().unwrap_or(0))
	}
}

type Listener = Rc<dyn Fn(Option<PlaybackFrame>)>;

struct Inner<S: Scheduler> {
	scheduler: S,
	interval_ms: u32,
	result: Option<Arc<SpreadResult>>,
	state: PlaybackState,
	pending: Option<(u64, S::Handle)>,
	next_token: u64,
	listener: Option<Listener>,
}

impl<S: Scheduler> Inner<S> {
	fn frame(&self) -> Option<PlaybackFrame> {
		self.result.as_ref().map(|result| PlaybackFrame {
			result: result.clone(),
			state: self.state,
		})
	}

	fn cancel_pending(&mut self) {
		if let Some((token, handle)) = self.pending.take() {
			debug!("playback: cancelling tick {token}");
			self.scheduler.cancel(handle);
		}
	}
}

/// Drives a [`PlaybackState`] on a timer. Clones share the same state.
pub struct PlaybackController<S: Scheduler + 'static> {
	inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Scheduler + 'static> Clone for PlaybackController<S> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<S: Scheduler + 'static> PlaybackController<S> {
	pub fn new(scheduler: S, interval_ms: u32) -> Self {
		Self {
			inner: Rc::new(RefCell::new(Inner {
				scheduler,
				interval_ms,
				result: None,
				state: PlaybackState::default(),
				pending: None,
				next_token: 0,
				listener: None,
			})),
		}
	}

	/// Register the observer notified after every change. Replaces any
	/// previous observer.
	pub fn on_change(&self, listener: impl Fn(Option<PlaybackFrame>) + 'static) {
		self.inner.borrow_mut().listener = Some(Rc::new(listener));
	}

	pub fn state(&self) -> PlaybackState {
		self.inner.borrow().state
	}

	pub fn frame(&self) -> Option<PlaybackFrame> {
		self.inner.borrow().frame()
	}

	/// Swap in a new result. Any tick scheduled for the previous result is
	/// cancelled before the new state becomes observable.
	pub fn load(&self, result: Arc<SpreadResult>) {
		let update = {
			let mut inner = self.inner.borrow_mut();
			inner.cancel_pending();
			debug!("playback: loaded {} nodes", result.len());
			inner.state = PlaybackState::loaded(result.len());
			inner.result = Some(result);
			(inner.frame(), inner.listener.clone())
		};
		notify(update);
	}

	/// Drop the loaded result and stop any timer.
	pub fn clear(&self) {
		let update = {
			let mut inner = self.inner.borrow_mut();
			inner.cancel_pending();
			inner.result = None;
			inner.state = PlaybackState::default();
			(None, inner.listener.clone())
		};
		notify(update);
	}

	pub fn start(&self) {
		self.apply(PlaybackState::start);
	}

	pub fn pause(&self) {
		self.apply(PlaybackState::pause);
	}

	pub fn reset(&self) {
		self.apply(PlaybackState::reset);
	}

	pub fn replay(&self) {
		self.apply(PlaybackState::replay);
	}

	fn apply(&self, transition: fn(PlaybackState) -> PlaybackState) {
		let update = {
			let mut inner = self.inner.borrow_mut();
			if inner.result.is_none() {
				return;
			}
			let prev = inner.state;
			let next = transition(prev);
			if next == prev {
				return;
			}
			debug!("playback: {:?} -> {:?}", prev.status(), next.status());
			inner.state = next;
			// Replaying while running keeps the pending tick.
			self.sync_timer(&mut inner);
			(inner.frame(), inner.listener.clone())
		};
		notify(update);
	}

	fn on_tick(&self, token: u64) {
		let update = {
			let mut inner = self.inner.borrow_mut();
			match &inner.pending {
				Some((pending, _)) if *pending == token => {}
				_ => {
					debug!("playback: ignoring stale tick {token}");
					return;
				}
			}
			inner.pending = None;
			inner.state = inner.state.tick();
			self.sync_timer(&mut inner);
			(inner.frame(), inner.listener.clone())
		};
		notify(update);
	}

	/// Keep exactly one pending tick while running and none otherwise.
	fn sync_timer(&self, inner: &mut Inner<S>) {
		if !inner.state.is_running() {
			inner.cancel_pending();
			return;
		}
		if inner.pending.is_some() {
			return;
		}
		let token = inner.next_token;
		inner.next_token += 1;
		let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(&self.inner);
		let handle = inner.scheduler.schedule(
			inner.interval_ms,
			Box::new(move || {
				if let Some(inner) = weak.upgrade() {
					PlaybackController { inner }.on_tick(token);
				}
			}),
		);
		inner.pending = Some((token, handle));
	}
}

fn notify((frame, listener): (Option<PlaybackFrame>, Option<Listener>)) {
	if let Some(listener) = listener {
		listener(frame);
	}
}
