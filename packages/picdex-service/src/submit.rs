use serde::{Deserialize, Serialize};
use uuid::Uuid;

use picdex_domain::{scan, tag};
use picdex_storage::models::NewImage;

use crate::{Error, PicdexService, Result, resolve};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTagsRequest {
	pub channel_id: String,
	pub owner_id: String,
	/// Whitespace-separated tag text, exactly as the user typed it.
	pub tags: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTagsResponse {
	pub image_id: Uuid,
	pub source_message_id: String,
	pub media_url: String,
	pub tags: Vec<String>,
}

impl PicdexService {
	/// Tags the requester's most recent image post in the channel:
	/// scans the bounded history window for the qualifying message,
	/// canonicalizes the tags, and persists the association as one
	/// atomic write.
	pub async fn submit_tags(&self, req: SubmitTagsRequest) -> Result<SubmitTagsResponse> {
		let channel_id = req.channel_id.trim();
		let owner_id = req.owner_id.trim();

		if channel_id.is_empty() || owner_id.is_empty() {
			return Err(Error::Validation {
				message: "channel_id and owner_id are required.".to_string(),
			});
		}

		let raw_tags = tag::split_tag_text(&req.tags);

		if raw_tags.is_empty() {
			return Err(Error::Validation { message: "At least one tag is required.".to_string() });
		}

		let window_limit = self.cfg.scan.window_limit;
		let messages =
			self.history.recent(&self.cfg.providers.chat, channel_id, window_limit).await?;
		let window = &messages[..messages.len().min(window_limit as usize)];
		let Some(candidate) = scan::find_taggable(window, owner_id) else {
			return Err(Error::NotFound {
				message: format!(
					"No image posted by {owner_id} found in the last {window_limit} messages."
				),
			});
		};
		let tags = resolve::resolve_tags(self.store.as_ref(), &raw_tags).await?;
		let stored = self
			.store
			.insert_image(NewImage {
				source_message_id: candidate.source_message_id,
				channel_id: channel_id.to_string(),
				owner_id: owner_id.to_string(),
				media_url: candidate.media_url,
				tags,
			})
			.await?;

		tracing::info!(image_id = %stored.image_id, channel_id, "Indexed image.");

		Ok(SubmitTagsResponse {
			image_id: stored.image_id,
			source_message_id: stored.source_message_id,
			media_url: stored.media_url,
			tags: stored.tags,
		})
	}
}
