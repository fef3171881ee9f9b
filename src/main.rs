use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};

use message_organizer::{
    app::App,
    config::{parse_log_level, Config},
    logging::setup_logging,
    messages::{load_messages, sample_messages, CategoryFilter, FilterState, MessageStore},
    ui,
};

fn cli() -> Command {
    Command::new("message-organizer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Message Organizer Team")
        .about("Browse messages by category and free-text search")
        .arg(
            Arg::new("messages")
                .long("messages")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Load messages from a JSON file instead of the built-in samples"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to config.toml (defaults to the user config directory)"),
        )
        .arg(
            Arg::new("category")
                .short('c')
                .long("category")
                .value_name("CATEGORY")
                .help("Initial category filter: all, sales, general or recruitment"),
        )
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .value_name("TEXT")
                .help("Initial search text"),
        )
        .arg(
            Arg::new("print")
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Print the matching messages and exit instead of starting the TUI"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write logs to this file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level: off, error, warn, info, debug or trace"),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = Config::load(matches.get_one::<PathBuf>("config").map(|p| p.as_path()))?;

    let level = match matches.get_one::<String>("log-level") {
        Some(level) => parse_log_level(level)?,
        None => config.log_level_filter()?,
    };
    let log_path = matches
        .get_one::<PathBuf>("log-file")
        .cloned()
        .or_else(|| config.log_path());
    if let Some(path) = log_path {
        if let Err(e) = setup_logging(&path, level) {
            eprintln!("Warning: logging disabled: {:#}", e);
        }
    }

    let messages_file = matches
        .get_one::<PathBuf>("messages")
        .cloned()
        .or_else(|| config.messages_file.clone());
    let messages = match &messages_file {
        Some(path) => load_messages(path)?,
        None => sample_messages(),
    };
    let store = MessageStore::new(messages)?;
    log::info!(
        "loaded {} messages from {}",
        store.len(),
        messages_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in samples".to_string())
    );

    let category = match matches.get_one::<String>("category") {
        Some(category) => category.parse::<CategoryFilter>()?,
        None => config.category_filter()?,
    };
    let query = matches.get_one::<String>("search").cloned().unwrap_or_default();
    let filter = FilterState::new(category, query);

    if matches.get_flag("print") {
        let visible = filter.apply(store.all());
        let mut stdout = io::stdout().lock();
        stdout.write_all(ui::plain::render_plain(&visible, &config.date_format).as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let mut app = App::new(store, filter).with_date_format(config.date_format.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("terminal loop failed: {:#}", err);
    }
    res.context("terminal loop failed")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            let event = event::read()?;
            app.handle_input(event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
