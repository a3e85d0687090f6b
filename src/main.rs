use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use widget_export::{catalogue, WidgetExporter};

#[derive(Parser)]
#[command(version, about = "Export widgets to a Code,Name,Price CSV file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Export(ExportArgs),
    Sample(SampleArgs),
}

/// Export widgets read from a JSON catalogue.
#[derive(Parser)]
struct ExportArgs {
    #[arg(short, long, env = "WIDGET_EXPORT_INPUT")]
    input: String,

    #[arg(short, long, env = "WIDGET_EXPORT_OUTPUT")]
    output: String,
}

/// Export the built-in sample widgets.
#[derive(Parser)]
struct SampleArgs {
    #[arg(short, long, env = "WIDGET_EXPORT_OUTPUT")]
    output: String,
}

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exporter = WidgetExporter::new();

    match cli.command {
        Commands::Export(args) => {
            let widgets = catalogue::load(&args.input)
                .with_context(|| format!("loading catalogue {}", args.input))?;

            exporter
                .export(&widgets, &args.output)
                .with_context(|| format!("exporting {} widgets", widgets.len()))?;
        }

        Commands::Sample(args) => {
            exporter
                .export(&catalogue::sample(), &args.output)
                .context("exporting sample widgets")?;
        }
    };

    Ok(())
}
