use std::fs;
use std::path::PathBuf;
use std::thread;

use clap::Parser;

use pageview::{Config, PageView, render};

#[derive(Parser)]
#[command(name = "pageview")]
#[command(about = "Render a Markdown page into a styled text buffer")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Appearance config (defaults to the built-in configuration)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the render command stream instead of the styled runs
    #[arg(long)]
    commands: bool,
}

fn main() {
    let cli = Cli::parse();

    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::compiled_default(),
    };

    if cli.commands {
        let doc = pageview::parse(&markdown);
        for command in render(&doc, &config) {
            println!("{command:?}");
        }
        return;
    }

    let mut view = PageView::new(config);
    let handle = view.handle();

    // Parse and render on a worker; only this thread touches the buffer.
    let producer = thread::spawn(move || {
        let doc = pageview::parse(&markdown);
        handle.process_document(&doc);
    });
    if producer.join().is_err() {
        eprintln!("Error: render worker panicked");
        std::process::exit(1);
    }
    view.run_pending();

    for run in view.buffer().runs() {
        let font = view.styles().font(run.style);
        println!(
            "[{:?} {} x{:.2}] {:?}",
            run.style, font.family, font.size_scale, run.text
        );
    }
    for span in view.buffer().link_spans() {
        println!("link {}..{} -> {}", span.start, span.end, span.url);
    }
}
