use uuid::Uuid;

use picdex_storage::models::StoredImage;

/// What the presentation layer shows for the image under the cursor.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RenderedImage {
	pub image_id: Uuid,
	pub owner_id: String,
	pub tags: Vec<String>,
	pub media_url: String,
	pub position: usize,
	pub total: usize,
}

pub(crate) fn render(image: &StoredImage, position: usize, total: usize) -> RenderedImage {
	RenderedImage {
		image_id: image.image_id,
		owner_id: image.owner_id.clone(),
		tags: image.tags.clone(),
		media_url: image.media_url.clone(),
		position,
		total,
	}
}
