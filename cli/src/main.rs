//! planpdf CLI - markdown trading-plan rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use planpdf::{PlanPdf, RiskProfile};

#[derive(Parser)]
#[command(name = "planpdf")]
#[command(version)]
#[command(about = "Render a markdown trading plan to a paginated PDF", long_about = None)]
struct Cli {
    /// Input markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Risk profile JSON file
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown plan to PDF
    Render {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Risk profile JSON file
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Cover title
        #[arg(long)]
        title: Option<String>,

        /// Footer attribution text
        #[arg(long)]
        attribution: Option<String>,

        /// Currency symbol for the risk dashboard
        #[arg(long)]
        currency: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        uncompressed: bool,
    },

    /// Show render statistics for a plan without writing a file
    Info {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Risk profile JSON file
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },

    /// Validate a risk profile JSON file
    Check {
        /// Risk profile JSON file
        #[arg(value_name = "FILE")]
        profile: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            profile,
            title,
            attribution,
            currency,
            uncompressed,
        }) => cmd_render(
            &input,
            output.as_deref(),
            profile.as_deref(),
            title,
            attribution,
            currency,
            uncompressed,
        ),
        Some(Commands::Info { input, profile }) => cmd_info(&input, profile.as_deref()),
        Some(Commands::Check { profile }) => cmd_check(&profile),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_render(
                    &input,
                    cli.output.as_deref(),
                    cli.profile.as_deref(),
                    None,
                    None,
                    None,
                    false,
                )
            } else {
                println!("{}", "Usage: planpdf <FILE> [OUTPUT]".yellow());
                println!("       planpdf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_profile(path: &Path) -> Result<RiskProfile, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let profile: RiskProfile = serde_json::from_str(&json)
        .map_err(|e| format!("Invalid profile JSON in {}: {}", path.display(), e))?;
    profile.validate()?;
    Ok(profile)
}

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    profile_path: Option<&Path>,
    title: Option<String>,
    attribution: Option<String>,
    currency: Option<String>,
    uncompressed: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("pdf"));

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading plan...");
    let markdown = fs::read_to_string(input)?;
    let mut builder = PlanPdf::new();
    if let Some(t) = title {
        builder = builder.with_title(t);
    }
    if let Some(a) = attribution {
        builder = builder.with_attribution(a);
    }
    if let Some(c) = currency {
        builder = builder.with_currency(c);
    }
    if uncompressed {
        builder = builder.uncompressed();
    }
    if let Some(path) = profile_path {
        builder = builder.with_profile(load_profile(path)?);
    }
    pb.inc(1);

    pb.set_message("Rendering pages...");
    let doc = builder.render(&markdown)?;
    pb.inc(1);

    pb.set_message("Writing PDF...");
    doc.save(&output_path)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} ({} pages)",
        "Saved to".green(),
        output_path.display(),
        doc.page_count()
    );

    Ok(())
}

fn cmd_info(input: &Path, profile_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let mut builder = PlanPdf::new();
    if let Some(path) = profile_path {
        builder = builder.with_profile(load_profile(path)?);
    }
    let doc = builder.render(&markdown)?;
    let stats = doc.stats();

    println!("{}", "Plan Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Numbered items".bold(), stats.numbered_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let profile = load_profile(path)?;

    println!("{}", "Profile OK".green().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Capital".bold(), profile.capital);
    println!(
        "{}: {}% ({:.2} per trade)",
        "Risk per trade".bold(),
        profile.risk_per_trade_pct,
        profile.risk_amount()
    );
    println!(
        "{}: {}% ({:.2} per day)",
        "Max daily loss".bold(),
        profile.max_daily_loss_pct,
        profile.daily_loss_amount()
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "planpdf".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown trading-plan to PDF renderer");
    println!();
    println!("License: MIT");
}
