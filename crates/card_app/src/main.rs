//! profile-card - render employee profile cards from the command line

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use card_app::config::CONFIG_FILE;
use card_app::{
    run_scenario, CardConfig, Dispatched, HeadlessRunConfig, HeadlessScenario, IntakeOutcome,
    PageSignal, ProfileCardApp,
};
use card_cn::CardEvent;
use card_core::FileHandle;
use card_export::{DirectorySink, ExportOutcome, SoftwareRasterizer};
use card_text::{EstimatedMeasurer, FontMeasurer, FontRegistry, TextMeasurer};
use card_theme::ThemeName;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "profile-card", version, about = "Employee profile card renderer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card and write it as a PNG
    Export(ExportArgs),

    /// Run a JSON headless scenario against the card
    Scenario {
        /// Scenario file
        file: PathBuf,

        /// Write the JSON report to this relative path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Config file or directory containing card.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default card.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    title: Option<String>,

    /// minimal, dark mode or verizon
    #[arg(long)]
    theme: Option<ThemeName>,

    /// Avatar image
    #[arg(long)]
    image: Option<PathBuf>,

    /// Fill in random demo data before applying the other flags
    #[arg(long)]
    randomize: bool,

    /// Seed for --randomize
    #[arg(long, requires = "randomize")]
    seed: Option<u64>,

    /// Output directory, overrides export.output_dir
    #[arg(long)]
    out: Option<PathBuf>,

    /// Config file or directory containing card.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Export(args) => export(args).await,
        Command::Scenario {
            file,
            report,
            config,
        } => scenario(&file, report.as_deref(), config.as_deref()).await,
        Command::Init { dir } => init(&dir),
    }
}

fn load_config(path: Option<&Path>) -> Result<CardConfig> {
    match path {
        Some(path) => CardConfig::load_from_dir(path),
        None => CardConfig::load_or_default(Path::new(".")),
    }
}

async fn export(args: ExportArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        config.profile.theme = theme;
    }
    let output_dir = args.out.unwrap_or_else(|| config.export.output_dir.clone());

    // Layout and painting must use the same faces
    let mut registry = FontRegistry::new();
    let rasterizer = SoftwareRasterizer::with_registry(&mut registry);
    let measurer: Arc<dyn TextMeasurer> = match FontMeasurer::new(&mut registry) {
        Ok(measurer) => Arc::new(measurer),
        Err(err) => {
            tracing::warn!(error = %err, "falling back to estimated text widths");
            Arc::new(EstimatedMeasurer)
        }
    };

    let mut app = ProfileCardApp::new(
        &config,
        Arc::new(rasterizer),
        Arc::new(DirectorySink::new(&output_dir)),
        PageSignal::new(),
    )?
    .with_measurer(measurer);

    if args.randomize {
        match args.seed {
            Some(seed) => app.randomize_with(&mut StdRng::seed_from_u64(seed)),
            None => app.randomize_with(&mut rand::rng()),
        }
    }
    if let Some(name) = args.name {
        app.dispatch(CardEvent::SetName(name)).await?;
    }
    if let Some(title) = args.title {
        app.dispatch(CardEvent::SetTitle(title)).await?;
    }
    if let Some(path) = args.image {
        let handle = FileHandle::from_path(&path, media_type_for(&path));
        if app.dispatch(CardEvent::FilePicked(handle)).await?
            == Dispatched::Intake(IntakeOutcome::Ignored)
        {
            tracing::warn!(path = %path.display(), "not a recognized image, keeping initials");
        }
    }
    app.settle();

    let started = app.dispatch(CardEvent::Download).await?;
    match app.finish_exports().await.pop() {
        Some(ExportOutcome::Delivered { location, .. }) => {
            println!("{location}");
            Ok(())
        }
        Some(ExportOutcome::Failed { filename, reason }) => {
            bail!("Failed to export {filename}: {reason}")
        }
        None => bail!("export did not finish ({started:?})"),
    }
}

async fn scenario(file: &Path, report: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let scenario = HeadlessScenario::from_path(file)?;

    // Estimated widths keep scenario layouts identical across machines
    let mut app = ProfileCardApp::new(
        &config,
        Arc::new(SoftwareRasterizer::new()),
        Arc::new(DirectorySink::new(&config.export.output_dir)),
        PageSignal::new(),
    )?;

    let run_cfg = HeadlessRunConfig::from(&config.headless);
    let outcome = run_scenario(&mut app, &scenario, run_cfg).await?;
    if let Some(path) = report {
        outcome.report().write_to_path(path)?;
    }
    outcome.report().write_to_writer(&mut std::io::stdout().lock())?;

    if outcome.is_failed() {
        bail!("scenario {} failed", file.display());
    }
    Ok(())
}

fn init(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    std::fs::write(&path, CardConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

/// Media type from the file extension, the way a browser file picker
/// reports it
fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
