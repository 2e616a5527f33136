use clap::{ArgAction, Parser};
use resume_pdf::{BuildMode, Config, ResumeData, StyleName, DEFAULT_FAMILY, DEFAULT_OUTPUT};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate a one-page PDF resume from JSON data.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to a JSON file with resume fields; without it the built-in sample is used
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Output PDF path
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Layout style: 'ats' favours predictable text extraction, 'pretty' visual alignment
    #[arg(long, value_enum, default_value_t = StyleName::Ats)]
    style: StyleName,

    /// How missing fields are handled [default: strict with --data, fill-defaults without]
    #[arg(long, value_enum)]
    mode: Option<BuildMode>,

    /// Directory searched first for font files
    #[arg(long, value_name = "DIR", env = "RESUME_PDF_FONT_DIR")]
    font_dir: Option<PathBuf>,

    /// Font family to embed, found as <FAMILY>-Regular.ttf and <FAMILY>-Bold.ttf
    #[arg(long, value_name = "FAMILY", env = "RESUME_PDF_FONT_FAMILY", default_value = DEFAULT_FAMILY)]
    font_family: String,

    /// Page margin on every side, in points
    #[arg(long, value_name = "POINTS", default_value_t = 54.0)]
    margin: f32,

    /// Add a "Generated YYYY-MM-DD" footer
    #[arg(long)]
    timestamp: bool,

    /// Print the built-in sample resume as JSON and exit
    #[arg(long)]
    print_sample: bool,

    /// Log more (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Config {
        let mode = self
            .mode
            .unwrap_or_else(|| Config::default_mode(self.data.as_ref()));
        Config {
            data: self.data,
            output: self.output,
            style: self.style,
            mode,
            font_dir: self.font_dir,
            font_family: self.font_family,
            margin: self.margin.into(),
            timestamp: self.timestamp,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "resume_pdf=warn",
        1 => "resume_pdf=info",
        _ => "resume_pdf=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.print_sample {
        return match serde_json::to_string_pretty(&ResumeData::sample()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => report(&err),
        };
    }

    match resume_pdf::generate(&cli.into_config()) {
        Ok(summary) => {
            println!("Wrote {}", summary.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn report(err: &(dyn Error + 'static)) -> ExitCode {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
    ExitCode::FAILURE
}
