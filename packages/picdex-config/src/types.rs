use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	pub scan: Scan,
	pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub chat: ChatProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct ChatProviderConfig {
	pub api_base: String,
	pub token: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Scan {
	#[serde(default = "default_window_limit")]
	pub window_limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

fn default_window_limit() -> u32 {
	50
}

fn default_timeout_secs() -> u64 {
	300
}
