use picdex_domain::tag::{self, TagError};
use picdex_storage::{models::Tag, store::ImageStore};

use crate::{Error, Result};

/// Canonicalizes raw tags and resolves each to its stored record,
/// creating missing ones on first use. The result keeps the first-seen
/// order of the input. Concurrent creation of the same new name is
/// absorbed by the store and never surfaces here.
pub(crate) async fn resolve_tags(store: &dyn ImageStore, raw_tags: &[String]) -> Result<Vec<Tag>> {
	let normalized = tag::normalize_all(raw_tags).map_err(|err| match err {
		TagError::EmptyList =>
			Error::Validation { message: "At least one tag is required.".to_string() },
		TagError::EmptyTag =>
			Error::Validation { message: "Tags must not be empty after trimming.".to_string() },
	})?;
	let mut tags = Vec::with_capacity(normalized.len());

	for name in &normalized {
		tags.push(store.resolve_tag(name).await?);
	}

	Ok(tags)
}
