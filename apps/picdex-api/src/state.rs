use std::sync::Arc;

use picdex_service::PicdexService;
use picdex_storage::{db::Db, store::PgStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<PicdexService>,
}
impl AppState {
	pub async fn new(config: picdex_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = PicdexService::new(config, Arc::new(PgStore::new(db)));

		Ok(Self { service: Arc::new(service) })
	}

	pub fn with_service(service: Arc<PicdexService>) -> Self {
		Self { service }
	}
}
