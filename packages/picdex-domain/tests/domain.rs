use picdex_domain::{
	scan::{self, ChannelMessage, MessageAttachment},
	tag,
	viewer::{Direction, Viewer},
};

fn image_post(id: &str, author: &str, url: &str) -> ChannelMessage {
	ChannelMessage {
		message_id: id.to_string(),
		author_id: author.to_string(),
		attachments: vec![MessageAttachment {
			url: url.to_string(),
			content_type: Some("image/png".to_string()),
		}],
	}
}

#[test]
fn scan_then_tag_parse_cover_a_submit() {
	let window = vec![
		image_post("9", "bob", "https://cdn/other.png"),
		image_post("8", "alice", "https://cdn/sunset.png"),
	];
	let candidate = scan::find_taggable(&window, "alice").expect("Expected a qualifying message.");

	assert_eq!(candidate.source_message_id, "8");

	let raw = tag::split_tag_text("Sky  BLUE sky");
	let tags = tag::normalize_all(&raw).expect("Expected a normalized tag list.");

	assert_eq!(tags, vec!["sky".to_string(), "blue".to_string()]);
}

#[test]
fn viewer_walks_a_result_set_in_both_directions() {
	let mut viewer = Viewer::new(3).expect("Expected a viewer over three results.");
	let mut seen = vec![viewer.cursor()];

	for _ in 0..3 {
		seen.push(viewer.step(Direction::Next).expect("Navigation must stay active."));
	}

	assert_eq!(seen, vec![0, 1, 2, 0]);
	assert_eq!(viewer.step(Direction::Previous).unwrap(), 2);
}
