#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
	Next,
	Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
	Active,
	Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerError {
	EmptyResults,
	Expired,
}

/// Cursor state machine over one ordered result set. Navigation wraps
/// around in both directions; once expired, every transition fails and
/// the cursor stays put.
#[derive(Debug, Clone)]
pub struct Viewer {
	cursor: usize,
	count: usize,
	state: ViewerState,
}
impl Viewer {
	pub fn new(count: usize) -> Result<Self, ViewerError> {
		if count == 0 {
			return Err(ViewerError::EmptyResults);
		}

		Ok(Self { cursor: 0, count, state: ViewerState::Active })
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn state(&self) -> ViewerState {
		self.state
	}

	/// Applies one navigation step and returns the new cursor, which
	/// is also the index to re-render.
	pub fn step(&mut self, direction: Direction) -> Result<usize, ViewerError> {
		if self.state == ViewerState::Expired {
			return Err(ViewerError::Expired);
		}

		self.cursor = match direction {
			Direction::Next => (self.cursor + 1) % self.count,
			Direction::Previous => (self.cursor + self.count - 1) % self.count,
		};

		Ok(self.cursor)
	}

	pub fn expire(&mut self) {
		self.state = ViewerState::Expired;
	}
}
