pub mod close;
pub mod navigate;
pub mod render;
pub mod search;
pub mod submit;

mod error;
mod resolve;
mod sessions;

use std::{future::Future, pin::Pin, sync::Arc};

pub use close::{CloseSessionRequest, CloseSessionResponse};
pub use error::{Error, Result};
pub use navigate::{NavigateRequest, NavigateResponse};
pub use render::RenderedImage;
pub use search::{SearchImagesRequest, SearchImagesResponse};
pub use submit::{SubmitTagsRequest, SubmitTagsResponse};

use picdex_config::{ChatProviderConfig, Config};
use picdex_domain::scan::ChannelMessage;
use picdex_providers::history;
use picdex_storage::store::ImageStore;

use crate::sessions::SessionRegistry;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Chat-transport seam: how the service reads a channel's recent
/// history. The default implementation talks to the platform's REST
/// API; tests script the window instead.
pub trait HistoryProvider
where
	Self: Send + Sync,
{
	fn recent<'a>(
		&'a self,
		cfg: &'a ChatProviderConfig,
		channel_id: &'a str,
		limit: u32,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ChannelMessage>>>;
}

struct DefaultHistory;

impl HistoryProvider for DefaultHistory {
	fn recent<'a>(
		&'a self,
		cfg: &'a ChatProviderConfig,
		channel_id: &'a str,
		limit: u32,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ChannelMessage>>> {
		Box::pin(history::recent_messages(cfg, channel_id, limit))
	}
}

pub struct PicdexService {
	pub cfg: Config,
	pub store: Arc<dyn ImageStore>,
	pub history: Arc<dyn HistoryProvider>,
	sessions: SessionRegistry,
}
impl PicdexService {
	pub fn new(cfg: Config, store: Arc<dyn ImageStore>) -> Self {
		Self::with_history(cfg, store, Arc::new(DefaultHistory))
	}

	pub fn with_history(
		cfg: Config,
		store: Arc<dyn ImageStore>,
		history: Arc<dyn HistoryProvider>,
	) -> Self {
		Self { cfg, store, history, sessions: SessionRegistry::new() }
	}
}
