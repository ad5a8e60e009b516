use anyhow::Result;
use app_ui::typography::font_assets;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use todo_smart::App;

/// Render Todo Smart screens as JSON component trees
#[derive(Debug, Parser)]
#[command(name = "todo-smart", version)]
struct Cli {
    /// Path or deep link to open, e.g. `/task/42` or `todo-smart://settings`
    path: Option<String>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Output::Screen)]
    output: Output,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Component tree of the active screen
    Screen,
    /// Navigation topology
    Navigation,
    /// Theme tokens
    Theme,
    /// Bundled font manifest
    Fonts,
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = App::from_env()?;

    if let Some(path) = &cli.path {
        app.open_path(path)?;
    }

    match cli.output {
        Output::Screen => print_json(&app.render_current()?, cli.compact),
        Output::Navigation => print_json(app.tree(), cli.compact),
        Output::Theme => print_json(app.theme().as_ref(), cli.compact),
        Output::Fonts => print_json(&font_assets(&app.theme().typography), cli.compact),
    }
}
