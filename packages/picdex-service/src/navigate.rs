use serde::{Deserialize, Serialize};
use uuid::Uuid;

use picdex_domain::viewer::Direction;

use crate::{Error, PicdexService, RenderedImage, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
	pub session_id: Uuid,
	pub requester_id: String,
	pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
	pub image: RenderedImage,
}

impl PicdexService {
	/// One wrap-around step through an open session's results. Only
	/// the requester that opened the session may navigate it.
	pub async fn navigate(&self, req: NavigateRequest) -> Result<NavigateResponse> {
		let requester_id = req.requester_id.trim();

		if requester_id.is_empty() {
			return Err(Error::Validation { message: "requester_id is required.".to_string() });
		}

		let image = self.sessions.navigate(req.session_id, requester_id, req.direction).await?;

		Ok(NavigateResponse { image })
	}
}
