use crate::{
	BoxFuture, Result,
	db::Db,
	models::{ImageQuery, NewImage, StoredImage, Tag},
	queries,
};

/// Persistence seam of the indexing core. Handed to the service at
/// construction so tests can swap in an in-memory implementation.
pub trait ImageStore
where
	Self: Send + Sync,
{
	fn resolve_tag<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Tag>>;

	fn insert_image<'a>(&'a self, image: NewImage) -> BoxFuture<'a, Result<StoredImage>>;

	fn search_images<'a>(&'a self, query: ImageQuery) -> BoxFuture<'a, Result<Vec<StoredImage>>>;
}

pub struct PgStore {
	pub db: Db,
}
impl PgStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl ImageStore for PgStore {
	fn resolve_tag<'a>(&'a self, name: &'a str) -> BoxFuture<'a, Result<Tag>> {
		Box::pin(queries::resolve_tag(&self.db, name))
	}

	fn insert_image<'a>(&'a self, image: NewImage) -> BoxFuture<'a, Result<StoredImage>> {
		Box::pin(queries::insert_image(&self.db, image))
	}

	fn search_images<'a>(&'a self, query: ImageQuery) -> BoxFuture<'a, Result<Vec<StoredImage>>> {
		Box::pin(async move { queries::search_images(&self.db, &query).await })
	}
}
