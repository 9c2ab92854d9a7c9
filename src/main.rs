use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use kite::config::{Config, EditorConfig};
use kite::editor::{Editor, HELP_MESSAGE};
use kite::input::KeyDecoder;
use kite::services::terminal::{self, TerminalModes};
use kite::services::tracing_setup;
use kite::services::tty::StdinBytes;
use std::io::{self, Write};
use std::path::PathBuf;

/// A small screen-oriented terminal text editor
#[derive(Parser, Debug)]
#[command(name = "kite")]
#[command(about = "A small screen-oriented terminal text editor", long_about = None)]
#[command(version)]
struct Args {
    /// File to open (created on first save if it does not exist)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Override the configured tab stop width
    #[arg(long, value_name = "N")]
    tab_stop: Option<usize>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))?,
        None => Config::load_or_default(),
    };

    if let Some(tab_stop) = args.tab_stop {
        config.editor.tab_stop = tab_stop;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid --tab-stop: {}", e))?;
    }
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    if let Err(e) = tracing_setup::init_file_logging(&log_path) {
        eprintln!("Warning: {:#}", e);
    }

    let mut terminal_modes = TerminalModes::enable().context("Failed to enable raw mode")?;
    let result = run_editor(&args, config.editor);
    let restored = terminal_modes
        .restore()
        .context("Failed to restore terminal mode");

    if let Err(e) = &result {
        tracing::error!("Editor exited with error: {:#}", e);
    }
    result.and(restored)
}

fn run_editor(args: &Args, config: EditorConfig) -> AnyhowResult<()> {
    let mut input = StdinBytes::new(config.poll_timeout_ms).context("Failed to open stdin")?;
    let mut stdout = io::stdout();

    let (rows, cols) =
        terminal::window_size(&mut input, &mut stdout).context("Failed to get window size")?;
    tracing::info!("Terminal size {}x{}", cols, rows);

    let mut editor = Editor::new(config, rows, cols);
    if let Some(path) = &args.file {
        editor.open_file(path);
    }
    if editor.status_message().is_empty() {
        editor.set_status_message(HELP_MESSAGE);
    }

    let mut decoder = KeyDecoder::new(input);
    let mut frame = Vec::with_capacity(usize::from(rows) * usize::from(cols));
    while !editor.should_quit() {
        frame.clear();
        editor.render(&mut frame).context("Failed to render frame")?;
        stdout
            .write_all(&frame)
            .and_then(|()| stdout.flush())
            .context("Failed to write frame")?;

        if let Some(key) = decoder.next_key().context("Failed to read input")? {
            editor.handle_key(key);
        }
    }
    Ok(())
}
