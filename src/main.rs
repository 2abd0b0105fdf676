use clap::Parser;
use moodle_light_core::app::{run, CoursePage, TerminalView};
use moodle_light_core::client::request::NoWasmClient;
use moodle_light_core::config::Cli;
use moodle_light_core::error::Result;
use moodle_light_core::interface::HttpClient;
use moodle_light_core::logger::init_logger;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger();

    let client = NoWasmClient::new(&cli.base_url).await?;
    log::debug!("courses endpoint: {}", client.courses_url());

    let page = CoursePage::new(client, TerminalView);
    let report = run(&page, cli.command, BufReader::new(tokio::io::stdin())).await?;

    if report.failed() {
        std::process::exit(1);
    }

    Ok(())
}
