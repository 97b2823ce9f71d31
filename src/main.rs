use focusgrid::prepare;

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
	simple_logger::SimpleLogger::new()
		.env()
		.init()
		.expect("failed to initialize logger");
	let _ = prepare().launch().await?;
	Ok(())
}
