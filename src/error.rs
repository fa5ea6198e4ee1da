use thiserror::Error;

/// Input rejected before any request is issued.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Please select a country")]
	MissingCountry,
	#[error("Please select both start and end countries")]
	MissingEndpoints,
	#[error("Start and end countries must be different")]
	SameEndpoints,
}

/// Failure of a call to the analytics service.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FetchError {
	#[error("request failed: {0}")]
	Network(String),
	#[error("service returned {status}: {body}")]
	Status { status: u16, body: String },
	#[error("malformed response: {0}")]
	Decode(String),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error(transparent)]
	Fetch(#[from] FetchError),
}

/// The three service operations, for operator-facing wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
	Prediction,
	Simulation,
	Path,
}

impl Operation {
	pub fn failure_message(&self) -> &'static str {
		match self {
			Self::Prediction => "Failed to fetch prediction. Please try again.",
			Self::Simulation => "Failed to fetch simulation. Please try again.",
			Self::Path => "Failed to find path. Please try again.",
		}
	}
}

impl AppError {
	/// Text shown to the operator. Fetch failures are reduced to a generic
	/// message; their cause only goes to the log.
	pub fn user_message(&self, operation: Operation) -> String {
		match self {
			Self::Validation(e) => e.to_string(),
			Self::Fetch(_) => operation.failure_message().to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fetch_causes_are_hidden_from_the_operator() {
		let err = AppError::from(FetchError::Status {
			status: 500,
			body: "Traceback (most recent call last)".into(),
		});
		assert_eq!(
			err.user_message(Operation::Path),
			"Failed to find path. Please try again."
		);
		assert!(err.to_string().contains("500"));
	}

	#[test]
	fn validation_messages_are_shown_verbatim() {
		let err = AppError::from(ValidationError::SameEndpoints);
		assert_eq!(
			err.user_message(Operation::Path),
			"Start and end countries must be different"
		);
	}
}
