use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

use picdex_domain::scan::{ChannelMessage, MessageAttachment};

/// Fetches the most recent messages of a channel, newest first, capped
/// at `limit`. The chat platform already returns history in reverse
/// chronological order; this keeps that order.
pub async fn recent_messages(
	cfg: &picdex_config::ChatProviderConfig,
	channel_id: &str,
	limit: u32,
) -> Result<Vec<ChannelMessage>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}/channels/{channel_id}/messages", cfg.api_base);
	let res = client
		.get(url)
		.headers(crate::auth_headers(&cfg.token)?)
		.query(&[("limit", limit)])
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_history_response(json)
}

fn parse_history_response(json: Value) -> Result<Vec<ChannelMessage>> {
	let entries =
		json.as_array().ok_or_else(|| eyre::eyre!("History response is not an array."))?;
	let mut messages = Vec::with_capacity(entries.len());

	for entry in entries {
		let message_id = entry
			.get("id")
			.and_then(Value::as_str)
			.ok_or_else(|| eyre::eyre!("History entry is missing an id."))?;
		let author_id = entry
			.get("author")
			.and_then(|author| author.get("id"))
			.and_then(Value::as_str)
			.ok_or_else(|| eyre::eyre!("History entry is missing an author id."))?;
		let attachments = entry
			.get("attachments")
			.and_then(Value::as_array)
			.map(|raw| parse_attachments(raw))
			.transpose()?
			.unwrap_or_default();

		messages.push(ChannelMessage {
			message_id: message_id.to_string(),
			author_id: author_id.to_string(),
			attachments,
		});
	}

	Ok(messages)
}

fn parse_attachments(raw: &[Value]) -> Result<Vec<MessageAttachment>> {
	let mut attachments = Vec::with_capacity(raw.len());

	for item in raw {
		let url = item
			.get("url")
			.and_then(Value::as_str)
			.ok_or_else(|| eyre::eyre!("Attachment is missing a url."))?;
		let content_type =
			item.get("content_type").and_then(Value::as_str).map(str::to_string);

		attachments.push(MessageAttachment { url: url.to_string(), content_type });
	}

	Ok(attachments)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_messages_with_attachments() {
		let json = serde_json::json!([
			{
				"id": "2",
				"author": { "id": "alice" },
				"attachments": [
					{ "url": "https://cdn/a.png", "content_type": "image/png" },
					{ "url": "https://cdn/b.bin" }
				]
			},
			{ "id": "1", "author": { "id": "bob" } }
		]);
		let messages = parse_history_response(json).expect("parse failed");

		assert_eq!(messages.len(), 2);
		assert_eq!(messages[0].message_id, "2");
		assert_eq!(messages[0].attachments.len(), 2);
		assert_eq!(messages[0].attachments[0].content_type.as_deref(), Some("image/png"));
		assert_eq!(messages[0].attachments[1].content_type, None);
		assert_eq!(messages[1].author_id, "bob");
		assert!(messages[1].attachments.is_empty());
	}

	#[test]
	fn rejects_entries_without_an_id() {
		let json = serde_json::json!([{ "author": { "id": "alice" } }]);

		assert!(parse_history_response(json).is_err());
	}
}
