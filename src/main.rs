use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use std::path::{Path, PathBuf};

use interior_quote::config::{load_config, Config};
use interior_quote::export::{export_quotation, format_total, ExportFormat};
use interior_quote::model::{load_quotation, Quotation};
use interior_quote::state::QuoteForm;
use interior_quote::ui::App;

#[derive(Parser, Debug)]
#[command(name = "interior-quote")]
#[command(about = "Interior Quote - price furnishing work and export quotations")]
#[command(version)]
struct Args {
    /// Quotation JSON to preload
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// TOML file with company branding and document settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory exported files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Export the PDF quotation without opening the form
    #[arg(long)]
    pdf: bool,

    /// Export a JSON snapshot without opening the form
    #[arg(long)]
    json: bool,

    /// Export the CSV cost breakdown without opening the form
    #[arg(long)]
    csv: bool,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn formats(&self) -> Vec<ExportFormat> {
        [
            (self.pdf, ExportFormat::Pdf),
            (self.json, ExportFormat::Json),
            (self.csv, ExportFormat::Csv),
        ]
        .into_iter()
        .filter_map(|(wanted, format)| wanted.then_some(format))
        .collect()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let formats = args.formats();
    let headless = !formats.is_empty();

    // The form owns the terminal, so it only logs to a file
    match (&args.log_file, headless) {
        (Some(path), _) => init_tracing(Some(path))?,
        (None, true) => init_tracing(None)?,
        (None, false) => {}
    }

    let config = load_config(args.config.as_deref()).wrap_err("failed to load configuration")?;
    let quotation = match &args.input {
        Some(path) => load_quotation(path).wrap_err("failed to load quotation")?,
        None => Quotation::new(),
    };

    if headless {
        return export_headless(&quotation, &config, &formats, &args.out_dir);
    }

    let terminal = ratatui::init();
    let result = App::new(QuoteForm::from_quotation(quotation), config, args.out_dir).run(terminal);
    ratatui::restore();
    result
}

fn export_headless(
    quotation: &Quotation,
    config: &Config,
    formats: &[ExportFormat],
    out_dir: &Path,
) -> Result<()> {
    quotation
        .ready_for_export()
        .wrap_err("refusing to export")?;
    if !out_dir.is_dir() {
        bail!("output directory '{}' does not exist", out_dir.display());
    }

    let snapshot = quotation.snapshot(chrono::Local::now().date_naive());
    let millis = chrono::Utc::now().timestamp_millis();
    println!(
        "Total: {}",
        format_total(
            snapshot.total_cost,
            &config.document.currency_prefix,
            config.document.grouping
        )
    );

    for &format in formats {
        let path = export_quotation(&snapshot, config, format, out_dir, millis)
            .wrap_err_with(|| format!("{} export failed", format.extension().to_uppercase()))?;
        println!("Exported to {}: {}", format.extension().to_uppercase(), path.display());
    }
    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("interior_quote=info"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .wrap_err_with(|| format!("failed to create log file '{}'", path.display()))?;
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .wrap_err("failed to set tracing subscriber")?;
        }
        None => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .wrap_err("failed to set tracing subscriber")?;
        }
    }
    Ok(())
}
