use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use picdex_domain::tag;
use picdex_storage::models::ImageQuery;

use crate::{Error, PicdexService, RenderedImage, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchImagesRequest {
	pub channel_id: String,
	pub requester_id: String,
	/// Whitespace-separated tag text; every tag must be present on a
	/// matching image.
	pub tags: Option<String>,
	pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SearchImagesResponse {
	/// A viewer session was opened over the matches, positioned on the
	/// most recently indexed one.
	Results { session_id: Uuid, total: usize, image: RenderedImage },
	Empty,
}

impl PicdexService {
	/// Channel-scoped search by tags and/or poster. A query without
	/// either filter is rejected rather than dumping the channel.
	pub async fn search_images(&self, req: SearchImagesRequest) -> Result<SearchImagesResponse> {
		let channel_id = req.channel_id.trim();
		let requester_id = req.requester_id.trim();

		if channel_id.is_empty() || requester_id.is_empty() {
			return Err(Error::Validation {
				message: "channel_id and requester_id are required.".to_string(),
			});
		}

		let raw_tags = req.tags.as_deref().map(tag::split_tag_text).unwrap_or_default();
		let tags = if raw_tags.is_empty() {
			Vec::new()
		} else {
			tag::normalize_all(&raw_tags).map_err(|_| Error::Validation {
				message: "Tags must not be empty after trimming.".to_string(),
			})?
		};
		let owner_id = req
			.owner_id
			.as_deref()
			.map(str::trim)
			.filter(|owner| !owner.is_empty())
			.map(str::to_string);

		if tags.is_empty() && owner_id.is_none() {
			return Err(Error::Validation {
				message: "Search needs at least one tag or an owner filter.".to_string(),
			});
		}

		let images = self
			.store
			.search_images(ImageQuery { channel_id: channel_id.to_string(), tags, owner_id })
			.await?;

		if images.is_empty() {
			return Ok(SearchImagesResponse::Empty);
		}

		let total = images.len();
		let timeout = Duration::from_secs(self.cfg.viewer.timeout_secs);
		let (session_id, image) =
			self.sessions.open(requester_id.to_string(), images, timeout).await?;

		Ok(SearchImagesResponse::Results { session_id, total, image })
	}
}
