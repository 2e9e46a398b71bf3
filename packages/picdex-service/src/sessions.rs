use std::{
	collections::HashMap,
	time::{Duration, Instant},
};

use tokio::sync::Mutex;
use uuid::Uuid;

use picdex_domain::viewer::{Direction, Viewer, ViewerState};
use picdex_storage::models::StoredImage;

use crate::{
	Error, Result,
	render::{self, RenderedImage},
};

pub(crate) struct ViewerSession {
	requester_id: String,
	results: Vec<StoredImage>,
	viewer: Viewer,
	last_nav: Instant,
	timeout: Duration,
}
impl ViewerSession {
	fn timed_out(&self) -> bool {
		self.last_nav.elapsed() >= self.timeout
	}
}

/// In-process registry of open viewer sessions. Expiry is checked
/// lazily on access; stale entries are swept whenever a new session is
/// opened.
pub(crate) struct SessionRegistry {
	inner: Mutex<HashMap<Uuid, ViewerSession>>,
}
impl SessionRegistry {
	pub(crate) fn new() -> Self {
		Self { inner: Mutex::new(HashMap::new()) }
	}

	pub(crate) async fn open(
		&self,
		requester_id: String,
		results: Vec<StoredImage>,
		timeout: Duration,
	) -> Result<(Uuid, RenderedImage)> {
		let viewer = Viewer::new(results.len()).map_err(|_| Error::Validation {
			message: "A viewer session needs at least one result.".to_string(),
		})?;
		let session_id = Uuid::new_v4();
		let rendered = render::render(&results[0], 0, results.len());
		let mut sessions = self.inner.lock().await;

		sessions.retain(|_, session| !session.timed_out());
		sessions.insert(session_id, ViewerSession {
			requester_id,
			results,
			viewer,
			last_nav: Instant::now(),
			timeout,
		});

		Ok((session_id, rendered))
	}

	pub(crate) async fn navigate(
		&self,
		session_id: Uuid,
		requester_id: &str,
		direction: Direction,
	) -> Result<RenderedImage> {
		let mut sessions = self.inner.lock().await;
		let Some(session) = sessions.get_mut(&session_id) else {
			return Err(Error::NotFound { message: format!("Unknown session {session_id}.") });
		};

		if session.requester_id != requester_id {
			return Err(Error::Forbidden);
		}
		if session.viewer.state() == ViewerState::Active && session.timed_out() {
			session.viewer.expire();
		}

		let cursor = session.viewer.step(direction).map_err(|_| Error::SessionExpired)?;

		session.last_nav = Instant::now();

		Ok(render::render(&session.results[cursor], cursor, session.results.len()))
	}

	pub(crate) async fn close(&self, session_id: Uuid) -> bool {
		self.inner.lock().await.remove(&session_id).is_some()
	}
}
