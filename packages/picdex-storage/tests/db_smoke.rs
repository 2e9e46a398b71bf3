use picdex_config::Postgres;
use picdex_storage::{
	Error,
	db::Db,
	models::{ImageQuery, NewImage},
	queries,
};
use picdex_testkit::TestDatabase;

async fn bootstrapped_db() -> Option<(TestDatabase, Db)> {
	let base_dsn = match picdex_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("Skipping storage tests; set PICDEX_PG_DSN to run this test.");

			return None;
		},
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	Some((test_db, db))
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PICDEX_PG_DSN to run."]
async fn schema_bootstrap_creates_all_tables() {
	let Some((test_db, db)) = bootstrapped_db().await else {
		return;
	};

	for table in ["tags", "images", "image_tags"] {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table)
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "Missing table {table}.");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PICDEX_PG_DSN to run."]
async fn resolve_tag_reuses_the_canonical_row() {
	let Some((test_db, db)) = bootstrapped_db().await else {
		return;
	};
	let first = queries::resolve_tag(&db, "cat").await.expect("Failed to resolve tag.");
	let second = queries::resolve_tag(&db, "cat").await.expect("Failed to resolve tag.");

	assert_eq!(first.tag_id, second.tag_id);

	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM tags WHERE name = 'cat'")
		.fetch_one(&db.pool)
		.await
		.expect("Failed to count tags.");

	assert_eq!(count, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PICDEX_PG_DSN to run."]
async fn duplicate_source_message_is_a_conflict() {
	let Some((test_db, db)) = bootstrapped_db().await else {
		return;
	};
	let tag = queries::resolve_tag(&db, "sunset").await.expect("Failed to resolve tag.");
	let new_image = NewImage {
		source_message_id: "m-1".to_string(),
		channel_id: "c-1".to_string(),
		owner_id: "alice".to_string(),
		media_url: "https://cdn/a.png".to_string(),
		tags: vec![tag],
	};

	queries::insert_image(&db, new_image.clone()).await.expect("Failed to insert image.");

	let err = queries::insert_image(&db, new_image)
		.await
		.expect_err("Expected a conflict on re-submission.");

	assert!(matches!(err, Error::Conflict(_)), "Unexpected error: {err:?}");

	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM images")
		.fetch_one(&db.pool)
		.await
		.expect("Failed to count images.");

	assert_eq!(count, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PICDEX_PG_DSN to run."]
async fn search_requires_every_requested_tag() {
	let Some((test_db, db)) = bootstrapped_db().await else {
		return;
	};
	let cat = queries::resolve_tag(&db, "cat").await.expect("Failed to resolve tag.");
	let sunset = queries::resolve_tag(&db, "sunset").await.expect("Failed to resolve tag.");

	queries::insert_image(
		&db,
		NewImage {
			source_message_id: "m-1".to_string(),
			channel_id: "c-1".to_string(),
			owner_id: "alice".to_string(),
			media_url: "https://cdn/cat.png".to_string(),
			tags: vec![cat.clone()],
		},
	)
	.await
	.expect("Failed to insert image.");
	queries::insert_image(
		&db,
		NewImage {
			source_message_id: "m-2".to_string(),
			channel_id: "c-1".to_string(),
			owner_id: "bob".to_string(),
			media_url: "https://cdn/cat_sunset.png".to_string(),
			tags: vec![cat, sunset],
		},
	)
	.await
	.expect("Failed to insert image.");

	let both = queries::search_images(
		&db,
		&ImageQuery {
			channel_id: "c-1".to_string(),
			tags: vec!["cat".to_string(), "sunset".to_string()],
			owner_id: None,
		},
	)
	.await
	.expect("Failed to search images.");

	assert_eq!(both.len(), 1);
	assert_eq!(both[0].source_message_id, "m-2");

	let cats = queries::search_images(
		&db,
		&ImageQuery { channel_id: "c-1".to_string(), tags: vec!["cat".to_string()], owner_id: None },
	)
	.await
	.expect("Failed to search images.");

	assert_eq!(cats.len(), 2);
	// Most recently indexed first.
	assert_eq!(cats[0].source_message_id, "m-2");

	let alice_only = queries::search_images(
		&db,
		&ImageQuery {
			channel_id: "c-1".to_string(),
			tags: vec!["cat".to_string()],
			owner_id: Some("alice".to_string()),
		},
	)
	.await
	.expect("Failed to search images.");

	assert_eq!(alice_only.len(), 1);
	assert_eq!(alice_only[0].owner_id, "alice");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
