use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use vocab_flashcards::config::WORDS_DIR_ENV;
use vocab_flashcards::{logger, ui, App, Config, WordSource};

#[derive(Parser)]
#[command(name = "vocab-flashcards")]
#[command(about = "Study vocabulary lists as word lists and flashcards", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory with one word file per category
    /// Can also be set via VOCAB_WORDS_DIR environment variable
    #[arg(short, long, value_name = "DIR")]
    words_dir: Option<PathBuf>,

    /// Keep flashcards in file order
    #[arg(long)]
    no_shuffle: bool,

    /// Page to open, e.g. /learn/flashcard-without-answers/animals
    #[arg(short, long, value_name = "ROUTE")]
    open: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the available categories
    Categories,
    /// Print the words of a category
    Words {
        #[arg(value_name = "CATEGORY")]
        category: String,

        /// Print JSON instead of a tab-separated table
        #[arg(long)]
        json: bool,
    },
}

fn print_categories(source: &WordSource, out: &mut impl Write) -> Result<()> {
    let categories = source.categories().context("Failed to list categories")?;
    for category in categories {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}

fn print_words(
    source: &WordSource,
    category: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let words = source
        .load(category)
        .with_context(|| format!("Failed to load category {}", category))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &words)?;
        writeln!(out)?;
        return Ok(());
    }

    for word in &words {
        match word.dutch() {
            Some(dutch) => writeln!(out, "{}\t{}\t{}", word.english(), word.spanish(), dutch)?,
            None => writeln!(out, "{}\t{}", word.english(), word.spanish())?,
        }
    }
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key)
        {
            tracing::info!("Exiting");
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(std::env::var(WORDS_DIR_ENV).ok(), cli.words_dir, cli.no_shuffle);

    logger::init(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;
    tracing::info!("Using words directory {}", config.words_dir.display());

    let source = config.word_source();

    if let Some(command) = cli.command {
        return match command {
            Commands::Categories => print_categories(&source, &mut io::stdout().lock()),
            Commands::Words { category, json } => {
                print_words(&source, &category, json, &mut io::stdout().lock())
            }
        };
    }

    let mut app = App::new(source, config.shuffle);
    if let Some(route) = cli.open.as_deref() {
        app.open(route);
    }

    run_tui(app)
}
