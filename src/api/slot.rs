//! Lifecycle of one view's request/response pair.
//!
//! A validation failure only sets the error and keeps whatever is shown.
//! Committing a request clears the display; only the response to the most
//! recently committed request is applied.

use log::error;

use crate::error::{AppError, FetchError, Operation, ValidationError};

/// Identifies a committed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct RequestSlot<T> {
	operation: Operation,
	result: Option<T>,
	error: Option<String>,
	loading: bool,
	latest: u64,
}

impl<T> RequestSlot<T> {
	pub fn new(operation: Operation) -> Self {
		Self {
			operation,
			result: None,
			error: None,
			loading: false,
			latest: 0,
		}
	}

	pub fn result(&self) -> Option<&T> {
		self.result.as_ref()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Commit `request` if it validated, returning the ticket to finish it
	/// with. Rejected input leaves the current result on screen.
	pub fn submit<R>(&mut self, request: Result<R, ValidationError>) -> Option<(Ticket, R)> {
		match request {
			Ok(request) => Some((self.begin(), request)),
			Err(e) => {
				self.error = Some(AppError::from(e).user_message(self.operation));
				None
			}
		}
	}

	fn begin(&mut self) -> Ticket {
		self.latest += 1;
		self.result = None;
		self.error = None;
		self.loading = true;
		Ticket(self.latest)
	}

	/// Apply a response. Returns `false` and changes nothing when a newer
	/// request has been committed since `ticket` was issued.
	pub fn finish(&mut self, ticket: Ticket, outcome: Result<T, FetchError>) -> bool {
		if ticket.0 != self.latest {
			return false;
		}
		self.loading = false;
		match outcome {
			Ok(value) => self.result = Some(value),
			Err(e) => {
				error!("{:?} request failed: {e}", self.operation);
				self.error = Some(AppError::from(e).user_message(self.operation));
			}
		}
		true
	}
}
