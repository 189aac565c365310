use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use usersapp::app::App;
use usersapp::prompt::TerminalPrompter;
use usersapp::ui;

#[derive(Parser)]
#[command(name = "usersapp")]
#[command(about = "Interactive in-memory user records manager", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so the interactive transcript on stdout
    // stays clean. Off unless RUST_LOG enables them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    ui::banner();

    let mut app = App::new(TerminalPrompter::new());
    app.run()
}
