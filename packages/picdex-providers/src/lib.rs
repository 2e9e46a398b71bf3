pub mod history;

use color_eyre::Result;
use reqwest::header::{AUTHORIZATION, HeaderMap};

pub fn auth_headers(token: &str) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert(AUTHORIZATION, format!("Bearer {token}").parse()?);

	Ok(headers)
}
