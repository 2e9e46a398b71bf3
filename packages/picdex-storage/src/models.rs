use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Tag {
	pub tag_id: Uuid,
	pub name: String,
	pub created_at: OffsetDateTime,
}

/// An indexed image together with its canonical tag names.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoredImage {
	pub image_id: Uuid,
	pub source_message_id: String,
	pub channel_id: String,
	pub owner_id: String,
	pub media_url: String,
	pub created_at: OffsetDateTime,
	pub tags: Vec<String>,
}

/// Input of the indexing write. `tags` must already be resolved to
/// canonical records and non-empty.
#[derive(Debug, Clone)]
pub struct NewImage {
	pub source_message_id: String,
	pub channel_id: String,
	pub owner_id: String,
	pub media_url: String,
	pub tags: Vec<Tag>,
}

#[derive(Debug, Clone)]
pub struct ImageQuery {
	pub channel_id: String,
	pub tags: Vec<String>,
	pub owner_id: Option<String>,
}
