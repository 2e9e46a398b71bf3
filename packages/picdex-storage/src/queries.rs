use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Error, Result,
	db::Db,
	models::{ImageQuery, NewImage, StoredImage, Tag},
};

/// Returns the canonical record for a normalized tag name, creating it
/// on first use. Two writers racing on the same new name both end up
/// with the one row that won: the conflict clause turns the losing
/// insert into a read of the existing record.
pub async fn resolve_tag(db: &Db, name: &str) -> Result<Tag> {
	if name.trim().is_empty() {
		return Err(Error::InvalidArgument("Tag name must not be empty.".to_string()));
	}

	if let Some(tag) =
		sqlx::query_as::<_, Tag>("SELECT tag_id, name, created_at FROM tags WHERE name = $1")
			.bind(name)
			.fetch_optional(&db.pool)
			.await?
	{
		return Ok(tag);
	}

	let tag = sqlx::query_as::<_, Tag>(
		"\
INSERT INTO tags (tag_id, name)
VALUES ($1, $2)
ON CONFLICT (name) DO UPDATE
SET name = tags.name
RETURNING tag_id, name, created_at",
	)
	.bind(Uuid::new_v4())
	.bind(name)
	.fetch_one(&db.pool)
	.await?;

	Ok(tag)
}

/// Creates the image row and all of its tag associations in one
/// transaction; either everything lands or nothing does.
pub async fn insert_image(db: &Db, image: NewImage) -> Result<StoredImage> {
	if image.tags.is_empty() {
		return Err(Error::InvalidArgument(
			"An image must be indexed with at least one tag.".to_string(),
		));
	}

	let mut tx = db.pool.begin().await?;
	let existing: Option<(Uuid,)> =
		sqlx::query_as("SELECT image_id FROM images WHERE source_message_id = $1")
			.bind(&image.source_message_id)
			.fetch_optional(&mut *tx)
			.await?;

	if existing.is_some() {
		return Err(Error::Conflict(format!(
			"Message {} is already indexed.",
			image.source_message_id
		)));
	}

	let image_id = Uuid::new_v4();
	let created_at: OffsetDateTime = sqlx::query_scalar(
		"\
INSERT INTO images (image_id, source_message_id, channel_id, owner_id, media_url)
VALUES ($1, $2, $3, $4, $5)
RETURNING created_at",
	)
	.bind(image_id)
	.bind(&image.source_message_id)
	.bind(&image.channel_id)
	.bind(&image.owner_id)
	.bind(&image.media_url)
	.fetch_one(&mut *tx)
	.await
	.map_err(|err| conflict_on_unique(err, &image.source_message_id))?;

	for tag in &image.tags {
		sqlx::query("INSERT INTO image_tags (image_id, tag_id) VALUES ($1, $2)")
			.bind(image_id)
			.bind(tag.tag_id)
			.execute(&mut *tx)
			.await?;
	}

	tx.commit().await?;

	Ok(StoredImage {
		image_id,
		source_message_id: image.source_message_id,
		channel_id: image.channel_id,
		owner_id: image.owner_id,
		media_url: image.media_url,
		created_at,
		tags: image.tags.into_iter().map(|tag| tag.name).collect(),
	})
}

/// Channel-scoped search. Requested tags use superset semantics: an
/// image qualifies only when it carries every one of them. Newest
/// first, ties broken on image id descending.
pub async fn search_images(db: &Db, query: &ImageQuery) -> Result<Vec<StoredImage>> {
	let mut builder = sqlx::QueryBuilder::new(
		"SELECT i.image_id, i.source_message_id, i.channel_id, i.owner_id, i.media_url, i.created_at, \
		 array_agg(t.name ORDER BY t.name) AS tags \
         FROM images i \
         JOIN image_tags it ON it.image_id = i.image_id \
         JOIN tags t ON t.tag_id = it.tag_id \
         WHERE i.channel_id = ",
	);
	builder.push_bind(&query.channel_id);

	if let Some(owner_id) = &query.owner_id {
		builder.push(" AND i.owner_id = ");
		builder.push_bind(owner_id);
	}
	if !query.tags.is_empty() {
		builder.push(
			" AND i.image_id IN (\
             SELECT it2.image_id \
             FROM image_tags it2 \
             JOIN tags t2 ON t2.tag_id = it2.tag_id \
             WHERE t2.name = ANY(",
		);
		builder.push_bind(&query.tags);
		builder.push(") GROUP BY it2.image_id HAVING count(DISTINCT t2.name) = ");
		builder.push_bind(query.tags.len() as i64);
		builder.push(")");
	}

	builder.push(
		" GROUP BY i.image_id, i.source_message_id, i.channel_id, i.owner_id, i.media_url, i.created_at \
         ORDER BY i.created_at DESC, i.image_id DESC",
	);

	let images: Vec<StoredImage> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(images)
}

fn conflict_on_unique(err: sqlx::Error, source_message_id: &str) -> Error {
	match &err {
		sqlx::Error::Database(db_err) if db_err.is_unique_violation() =>
			Error::Conflict(format!("Message {source_message_id} is already indexed.")),
		_ => Error::Sqlx(err),
	}
}
