//! onesheet CLI - render Markdown briefs to single-page PDFs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::debug;

use onesheet::{parse, render, FitOptions, Theme};

#[derive(Parser)]
#[command(name = "onesheet")]
#[command(version)]
#[command(about = "Render a Markdown brief to a deterministic single-page PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown file to PDF
    Render {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file (defaults to the input path with a .pdf extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Theme JSON file (overrides --builtin)
        #[arg(short, long, value_name = "FILE")]
        theme: Option<PathBuf>,

        /// Built-in theme to use
        #[arg(long, value_enum, default_value = "minimal")]
        builtin: BuiltinTheme,

        /// Shrink factor applied per overflow retry
        #[arg(long, default_value = "0.94")]
        shrink: f64,

        /// Maximum layout attempts before accepting overflow
        #[arg(long, default_value = "6")]
        attempts: u32,
    },

    /// List built-in themes
    Themes,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuiltinTheme {
    /// Single column, centered title, white page
    Minimal,
    /// Two columns with a side panel and tinted page
    Designed,
}

impl BuiltinTheme {
    fn theme(self) -> Theme {
        match self {
            BuiltinTheme::Minimal => Theme::minimal(),
            BuiltinTheme::Designed => Theme::designed(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            theme,
            builtin,
            shrink,
            attempts,
        } => cmd_render(&input, output, theme, builtin, shrink, attempts),
        Commands::Themes => cmd_themes(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn cmd_render(
    input: &Path,
    output: Option<PathBuf>,
    theme_path: Option<PathBuf>,
    builtin: BuiltinTheme,
    shrink: f64,
    attempts: u32,
) -> onesheet::Result<()> {
    let theme = match theme_path {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            Theme::from_json(&json)?
        }
        None => builtin.theme(),
    };

    let markup = fs::read_to_string(input)?;
    let doc = parse(&markup);
    debug!("parsed {}: {} sections", input.display(), doc.section_count());

    let options = FitOptions::new()
        .with_shrink_factor(shrink)
        .with_max_attempts(attempts);
    let bytes = render(&doc, &theme, &options)?;

    let output = output.unwrap_or_else(|| input.with_extension("pdf"));
    fs::write(&output, &bytes)?;

    println!(
        "{} {} ({} bytes, theme {})",
        "wrote".green().bold(),
        output.display(),
        bytes.len(),
        theme.name.cyan()
    );
    Ok(())
}

fn cmd_themes() -> onesheet::Result<()> {
    for theme in [Theme::minimal(), Theme::designed()] {
        let layout = if theme.layout.two_column_ui {
            "two-column"
        } else {
            "single-column"
        };
        println!(
            "{:<10} {}x{} pt, {}",
            theme.name.cyan().bold(),
            theme.page.width,
            theme.page.height,
            layout
        );
    }
    Ok(())
}
