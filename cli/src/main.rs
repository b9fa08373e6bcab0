//! chatpress CLI - chat transcript export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use chatpress::{
    slug, to_draw_list, to_markdown, to_text, ExportOptions, Exporter, FontSize, Sender,
    Transcript,
};

#[derive(Parser)]
#[command(name = "chatpress")]
#[command(version)]
#[command(about = "Export chat transcripts to paginated documents, Markdown, and text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write all export artifacts (Markdown, text, page program)
    Export {
        /// Input transcript JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Document body font size
        #[arg(long, value_enum, default_value = "medium")]
        font_size: FontSizeArg,

        /// Omit "Sources:" blocks from the paginated document
        #[arg(long)]
        no_citations: bool,
    },

    /// Convert a transcript to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input transcript JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a transcript to plain text
    Text {
        /// Input transcript JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Lay out the paginated document and emit its JSON page program
    ///
    /// The page program is a backend-agnostic list of positioned draw
    /// commands; feed it to a PDF-drawing backend to produce final bytes.
    Document {
        /// Input transcript JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document body font size
        #[arg(long, value_enum, default_value = "medium")]
        font_size: FontSizeArg,

        /// Omit "Sources:" blocks
        #[arg(long)]
        no_citations: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show transcript information
    Info {
        /// Input transcript JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FontSizeArg {
    Small,
    Medium,
    Large,
}

impl From<FontSizeArg> for FontSize {
    fn from(arg: FontSizeArg) -> Self {
        match arg {
            FontSizeArg::Small => FontSize::Small,
            FontSizeArg::Medium => FontSize::Medium,
            FontSizeArg::Large => FontSize::Large,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            font_size,
            no_citations,
        } => cmd_export(&input, output.as_deref(), font_size, no_citations),
        Commands::Markdown { input, output } => cmd_markdown(&input, output.as_deref()),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Document {
            input,
            output,
            font_size,
            no_citations,
            compact,
        } => cmd_document(&input, output.as_deref(), font_size, no_citations, compact),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_transcript(path: &Path) -> Result<Transcript, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    let transcript: Transcript = serde_json::from_str(&data)?;
    log::debug!(
        "loaded transcript {:?}: {} messages",
        transcript.title,
        transcript.message_count()
    );
    Ok(transcript)
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    font_size: FontSizeArg,
    no_citations: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let transcript = load_transcript(input)?;

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_export", stem))
    });

    let exporter = Exporter::new()
        .with_font_size(font_size.into())
        .with_citations(!no_citations);

    let markdown = exporter.markdown(&transcript)?;
    markdown.write_to(&output_dir)?;

    let text = exporter.text(&transcript)?;
    text.write_to(&output_dir)?;

    let pages = exporter.draw_list(&transcript)?;
    let program_name = format!("{}_report.json", slug(&transcript.title));
    fs::write(output_dir.join(&program_name), pages.to_json(true)?)?;

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), markdown.filename);
    println!("  {} {}", "├─".dimmed(), text.filename);
    println!("  {} {}", "└─".dimmed(), program_name);

    Ok(())
}

fn cmd_markdown(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let transcript = load_transcript(input)?;
    let markdown = to_markdown(&transcript, &ExportOptions::new())?;

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let transcript = load_transcript(input)?;
    let text = to_text(&transcript, &ExportOptions::new())?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_document(
    input: &Path,
    output: Option<&Path>,
    font_size: FontSizeArg,
    no_citations: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let transcript = load_transcript(input)?;

    let options = ExportOptions::new()
        .with_font_size(font_size.into())
        .with_citations(!no_citations);
    let pages = to_draw_list(&transcript, &options)?;
    let json = pages.to_json(!compact)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
        println!(
            "{} {} pages, {} draw commands",
            "Laid out".green(),
            pages.page_count,
            pages.len()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let transcript = load_transcript(input)?;

    println!("{}", "Transcript Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), transcript.title);
    println!("{}: {}", "Messages".bold(), transcript.message_count());

    let user_count = transcript
        .messages
        .iter()
        .filter(|m| m.sender == Sender::User)
        .count();
    println!(
        "{}: {} from you, {} from the assistant",
        "Breakdown".bold(),
        user_count,
        transcript.message_count() - user_count
    );
    println!("{}: {}", "Citations".bold(), transcript.citation_count());

    let pages = to_draw_list(&transcript, &ExportOptions::new())?;
    println!(
        "{}: {} (at medium font size)",
        "Projected pages".bold(),
        pages.page_count
    );

    Ok(())
}
