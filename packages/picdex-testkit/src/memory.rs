use std::{collections::HashMap, sync::Mutex};

use time::OffsetDateTime;
use uuid::Uuid;

use picdex_storage::{
	BoxFuture, Error,
	models::{ImageQuery, NewImage, StoredImage, Tag},
	store::ImageStore,
};

/// In-memory `ImageStore` for tests. Matches the Postgres
/// implementation's contract; ordering uses an insertion sequence so
/// "most recently indexed first" stays deterministic even when two
/// inserts share a timestamp.
#[derive(Default)]
pub struct MemoryStore {
	inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
	tags: HashMap<String, Tag>,
	images: Vec<(u64, StoredImage)>,
	seq: u64,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
		self.inner.lock().unwrap_or_else(|err| err.into_inner())
	}
}
impl ImageStore for MemoryStore {
	fn resolve_tag<'a>(&'a self, name: &'a str) -> BoxFuture<'a, picdex_storage::Result<Tag>> {
		Box::pin(async move {
			if name.trim().is_empty() {
				return Err(Error::InvalidArgument("Tag name must not be empty.".to_string()));
			}

			let mut inner = self.lock();
			let tag = inner.tags.entry(name.to_string()).or_insert_with(|| Tag {
				tag_id: Uuid::new_v4(),
				name: name.to_string(),
				created_at: OffsetDateTime::now_utc(),
			});

			Ok(tag.clone())
		})
	}

	fn insert_image<'a>(
		&'a self,
		image: NewImage,
	) -> BoxFuture<'a, picdex_storage::Result<StoredImage>> {
		Box::pin(async move {
			if image.tags.is_empty() {
				return Err(Error::InvalidArgument(
					"An image must be indexed with at least one tag.".to_string(),
				));
			}

			let mut inner = self.lock();

			if inner
				.images
				.iter()
				.any(|(_, stored)| stored.source_message_id == image.source_message_id)
			{
				return Err(Error::Conflict(format!(
					"Message {} is already indexed.",
					image.source_message_id
				)));
			}

			let stored = StoredImage {
				image_id: Uuid::new_v4(),
				source_message_id: image.source_message_id,
				channel_id: image.channel_id,
				owner_id: image.owner_id,
				media_url: image.media_url,
				created_at: OffsetDateTime::now_utc(),
				tags: image.tags.into_iter().map(|tag| tag.name).collect(),
			};

			inner.seq += 1;

			let seq = inner.seq;

			inner.images.push((seq, stored.clone()));

			Ok(stored)
		})
	}

	fn search_images<'a>(
		&'a self,
		query: ImageQuery,
	) -> BoxFuture<'a, picdex_storage::Result<Vec<StoredImage>>> {
		Box::pin(async move {
			let inner = self.lock();
			let mut matches: Vec<(u64, StoredImage)> = inner
				.images
				.iter()
				.filter(|(_, stored)| stored.channel_id == query.channel_id)
				.filter(|(_, stored)| {
					query.owner_id.as_deref().map(|owner| stored.owner_id == owner).unwrap_or(true)
				})
				.filter(|(_, stored)| {
					query.tags.iter().all(|wanted| stored.tags.contains(wanted))
				})
				.cloned()
				.collect();

			matches.sort_by(|(a, _), (b, _)| b.cmp(a));

			Ok(matches.into_iter().map(|(_, stored)| stored).collect())
		})
	}
}
