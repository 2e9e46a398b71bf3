use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PicdexService, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseSessionRequest {
	pub session_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseSessionResponse {
	pub closed: bool,
}

impl PicdexService {
	/// Idempotent: closing an unknown or already-closed session is a
	/// no-op reported as `closed: false`.
	pub async fn close_session(&self, req: CloseSessionRequest) -> Result<CloseSessionResponse> {
		let closed = self.sessions.close(req.session_id).await;

		Ok(CloseSessionResponse { closed })
	}
}
