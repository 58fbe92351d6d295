//! unrtf CLI - RTF content extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use unrtf::{parse_file_with_options, CleanupPreset, Document, JsonFormat, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "unrtf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Parse RTF documents into text and JSON", long_about = None)]
struct Cli {
    /// Input RTF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Log and skip table control words found outside a table
    #[arg(long, global = true)]
    lenient: bool,

    /// Do not report unknown control words
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert RTF to plain text
    Text {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        /// Include picture data
        #[arg(long)]
        pictures: bool,
    },

    /// Convert RTF to JSON
    Json {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (whitespace and blank lines)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // --quiet also hides parser warnings unless RUST_LOG says otherwise
    let default_level = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut options = ParseOptions::new().with_unknown_control_reports(!cli.quiet);
    if cli.lenient {
        options = options.lenient();
    }

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            cleanup,
            pictures,
        }) => cmd_text(&input, output.as_deref(), cleanup, pictures, options),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, options),
        Some(Commands::Info { input }) => cmd_info(&input, options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: dump the document if input is provided
            if let Some(input) = cli.input {
                cmd_dump(&input, options)
            } else {
                println!("{}", "Usage: unrtf <FILE>".yellow());
                println!("       unrtf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_input(input: &Path, options: ParseOptions) -> Result<Document, Box<dyn std::error::Error>> {
    log::debug!("Parsing {}", input.display());
    let doc = parse_file_with_options(input, options)?;
    log::debug!(
        "Parsed {} sections, {} fonts, {} colours",
        doc.sections.len(),
        doc.font_table.len(),
        doc.colour_table.len()
    );
    Ok(doc)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    cleanup: Option<CleanupLevel>,
    pictures: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, options)?;

    let mut render_options = RenderOptions::new().with_pictures(pictures);
    if let Some(level) = cleanup {
        render_options = render_options.with_cleanup_preset(level.into());
    }

    let text = unrtf::render::to_text(&doc, &render_options)?;
    write_output(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unrtf::render::to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, options)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Character set".bold(), doc.character_set);
    if let Some(code_page) = doc.code_page {
        println!("{}: {}", "Code page".bold(), code_page);
    }
    print_default_font(&doc);
    println!("{}: {}", "Fonts".bold(), doc.font_table.len());
    println!("{}: {}", "Colours".bold(), doc.colour_table.len());
    println!("{}: {}", "Sections".bold(), doc.sections.len());

    let tables: Vec<_> = doc.tables().collect();
    println!("{}: {}", "Tables".bold(), tables.len());
    for (i, table) in tables.iter().enumerate() {
        println!(
            "  {} table {}: {} rows, {} columns",
            "├─".dimmed(),
            i + 1,
            table.row_count(),
            table.column_count()
        );
    }

    let words = doc.plain_text().split_whitespace().count();
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn print_default_font(doc: &Document) {
    match doc.font(doc.default_font) {
        Some(font) => println!("{}: {}", "Default font".bold(), font),
        None => println!("{}: {}", "Default font".bold(), doc.default_font),
    }
}

fn cmd_dump(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_input(input, options)?;
    print!("{}", doc);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unrtf".cyan().bold(), env!("CARGO_PKG_VERSION"));
}
