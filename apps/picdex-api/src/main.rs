use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = picdex_api::Args::parse();

	picdex_api::run(args).await
}
