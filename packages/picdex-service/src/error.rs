pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	Validation { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Conflict: {message}")]
	Conflict { message: String },
	#[error("The viewer session has expired.")]
	SessionExpired,
	#[error("The viewer session belongs to another requester.")]
	Forbidden,
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<picdex_storage::Error> for Error {
	fn from(err: picdex_storage::Error) -> Self {
		match err {
			picdex_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			picdex_storage::Error::InvalidArgument(message) => Self::Validation { message },
			picdex_storage::Error::NotFound(message) => Self::NotFound { message },
			picdex_storage::Error::Conflict(message) => Self::Conflict { message },
		}
	}
}

impl From<color_eyre::Report> for Error {
	fn from(err: color_eyre::Report) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
