//! Timer seam for the playback controller.
//!
//! The browser build schedules ticks through `gloo-timers`; tests drive the
//! controller with [`ManualScheduler`] so no wall-clock time passes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Schedules one-shot callbacks. Cancelling a handle guarantees its
/// callback never runs.
pub trait Scheduler {
	type Handle;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

	fn cancel(&self, handle: Self::Handle);
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
	type Handle = Timeout;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
		Timeout::new(delay_ms, callback)
	}

	fn cancel(&self, handle: Timeout) {
		// Dropping a `Timeout` clears it.
		drop(handle);
	}
}

struct Pending {
	id: u64,
	delay_ms: u32,
	callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
	next_id: u64,
	pending: Vec<Pending>,
	elapsed_ms: u64,
}

/// A scheduler whose callbacks only run when the caller fires them.
#[derive(Clone, Default)]
pub struct ManualScheduler {
	queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pending(&self) -> usize {
		self.queue.borrow().pending.len()
	}

	/// Total delay of every callback fired so far.
	pub fn elapsed_ms(&self) -> u64 {
		self.queue.borrow().elapsed_ms
	}

	/// Run the earliest scheduled callback. Returns `false` when nothing is
	/// pending.
	pub fn fire_next(&self) -> bool {
		let next = {
			let mut queue = self.queue.borrow_mut();
			if queue.pending.is_empty() {
				return false;
			}
			let next = queue.pending.remove(0);
			queue.elapsed_ms += u64::from(next.delay_ms);
			next
		};
		// The queue borrow is released so the callback may schedule again.
		(next.callback)();
		true
	}

	/// Fire callbacks until the queue drains or `limit` is reached.
	pub fn run_until_idle(&self, limit: usize) -> usize {
		let mut fired = 0;
		while fired < limit && self.fire_next() {
			fired += 1;
		}
		fired
	}
}

impl Scheduler for ManualScheduler {
	type Handle = u64;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> u64 {
		let mut queue = self.queue.borrow_mut();
		let id = queue.next_id;
		queue.next_id += 1;
		queue.pending.push(Pending {
			id,
			delay_ms,
			callback,
		});
		id
	}

	fn cancel(&self, handle: u64) {
		self.queue.borrow_mut().pending.retain(|p| p.id != handle);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[test]
	fn cancelled_callbacks_never_fire() {
		let scheduler = ManualScheduler::new();
		let hits = Rc::new(Cell::new(0));
		let (a, b) = (hits.clone(), hits.clone());
		let first = scheduler.schedule(800, Box::new(move || a.set(a.get() + 1)));
		scheduler.schedule(800, Box::new(move || b.set(b.get() + 10)));
		scheduler.cancel(first);

		assert_eq!(scheduler.run_until_idle(10), 1);
		assert_eq!(hits.get(), 10);
		assert_eq!(scheduler.elapsed_ms(), 800);
	}

	#[test]
	fn callbacks_may_reschedule() {
		let scheduler = ManualScheduler::new();
		let inner = scheduler.clone();
		scheduler.schedule(
			5,
			Box::new(move || {
				inner.schedule(5, Box::new(|| {}));
			}),
		);
		assert!(scheduler.fire_next());
		assert_eq!(scheduler.pending(), 1);
	}
}
