//! jamjar CLI - opinionated scaffolding for new Rails applications

use anyhow::Result;
use clap::Parser;
use jamjar_core::tui::RunArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jamjar")]
#[command(about = "Interactive scaffolder for new Rails applications")]
#[command(version)]
pub struct Args {
    /// Rails application root to scaffold (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = jamjar_core::tui::run(RunArgs {
        directory: args.directory,
    })
    .await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
