mod error;
mod types;

pub use error::{Error, Result};
pub use types::{ChatProviderConfig, Config, Postgres, Providers, Scan, Service, Storage, Viewer};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.chat.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.chat.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.providers.chat.token.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.chat.token must be non-empty.".to_string(),
		});
	}
	if cfg.providers.chat.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.chat.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.scan.window_limit == 0 {
		return Err(Error::Validation {
			message: "scan.window_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.viewer.timeout_secs == 0 {
		return Err(Error::Validation {
			message: "viewer.timeout_secs must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.providers.chat.api_base.ends_with('/') {
		cfg.providers.chat.api_base.pop();
	}
}
