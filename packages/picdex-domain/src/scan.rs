#[derive(Debug, Clone)]
pub struct MessageAttachment {
	pub url: String,
	pub content_type: Option<String>,
}

/// One entry of a channel's history window, newest first.
#[derive(Debug, Clone)]
pub struct ChannelMessage {
	pub message_id: String,
	pub author_id: String,
	pub attachments: Vec<MessageAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
	pub source_message_id: String,
	pub media_url: String,
}

/// Finds the most recent message in the window that can be tagged: it
/// must be authored by `owner_id`, carry attachments, and exactly one
/// of them must be an image. Posts with several images are skipped
/// whole rather than partially accepted.
pub fn find_taggable(messages: &[ChannelMessage], owner_id: &str) -> Option<ImageCandidate> {
	messages.iter().find_map(|message| {
		if message.author_id != owner_id || message.attachments.is_empty() {
			return None;
		}

		let mut images = message.attachments.iter().filter(|attachment| is_image(attachment));
		let first = images.next()?;

		if images.next().is_some() {
			return None;
		}

		Some(ImageCandidate {
			source_message_id: message.message_id.clone(),
			media_url: first.url.clone(),
		})
	})
}

fn is_image(attachment: &MessageAttachment) -> bool {
	attachment.content_type.as_deref().map(|kind| kind.starts_with("image")).unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn message(id: &str, author: &str, attachments: Vec<MessageAttachment>) -> ChannelMessage {
		ChannelMessage {
			message_id: id.to_string(),
			author_id: author.to_string(),
			attachments,
		}
	}

	fn attachment(url: &str, content_type: Option<&str>) -> MessageAttachment {
		MessageAttachment {
			url: url.to_string(),
			content_type: content_type.map(str::to_string),
		}
	}

	#[test]
	fn picks_the_most_recent_qualifying_message() {
		let messages = vec![
			message("3", "alice", vec![]),
			message("2", "alice", vec![attachment("https://cdn/a.png", Some("image/png"))]),
			message("1", "alice", vec![attachment("https://cdn/b.png", Some("image/png"))]),
		];
		let candidate = find_taggable(&messages, "alice").unwrap();

		assert_eq!(candidate.source_message_id, "2");
		assert_eq!(candidate.media_url, "https://cdn/a.png");
	}

	#[test]
	fn skips_other_authors() {
		let messages =
			vec![message("2", "bob", vec![attachment("https://cdn/a.png", Some("image/png"))])];

		assert_eq!(find_taggable(&messages, "alice"), None);
	}

	#[test]
	fn skips_multi_image_posts() {
		let messages = vec![message(
			"2",
			"alice",
			vec![
				attachment("https://cdn/a.png", Some("image/png")),
				attachment("https://cdn/b.jpg", Some("image/jpeg")),
			],
		)];

		assert_eq!(find_taggable(&messages, "alice"), None);
	}

	#[test]
	fn non_image_attachments_do_not_count() {
		let messages = vec![message(
			"2",
			"alice",
			vec![
				attachment("https://cdn/readme.txt", Some("text/plain")),
				attachment("https://cdn/a.png", Some("image/png")),
			],
		)];
		let candidate = find_taggable(&messages, "alice").unwrap();

		assert_eq!(candidate.media_url, "https://cdn/a.png");
	}

	#[test]
	fn missing_content_type_is_not_an_image() {
		let messages = vec![message("2", "alice", vec![attachment("https://cdn/a.bin", None)])];

		assert_eq!(find_taggable(&messages, "alice"), None);
	}

	#[test]
	fn exhausted_window_yields_nothing() {
		let messages = vec![
			message("2", "alice", vec![attachment("https://cdn/a.txt", Some("text/plain"))]),
			message("1", "bob", vec![attachment("https://cdn/b.png", Some("image/png"))]),
		];

		assert_eq!(find_taggable(&messages, "alice"), None);
	}
}
