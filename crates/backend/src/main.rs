pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use clap::{Parser, Subcommand, ValueEnum};
use contracts::usecases::u501_import_catalog::SchemaKind;
use shared::config::{load_config, Config};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use usecases::u501_import_catalog::{ImportExecutor, ImportRequest, IngestionError};

#[derive(Debug, Parser)]
#[command(name = "backend", version, about = "Rug catalog converter and kiosk server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert the vendor master list into data.json
    Convert {
        /// Source file; defaults to the configured CSV (or Excel with --format excel)
        #[arg(long)]
        source: Option<PathBuf>,
        /// Source format; guessed from the file extension when omitted
        #[arg(long, value_enum)]
        format: Option<SourceFormat>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve the frontend bundle and data.json
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceFormat {
    Csv,
    Excel,
}

impl From<SourceFormat> for SchemaKind {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Csv => SchemaKind::DelimitedText,
            SourceFormat::Excel => SchemaKind::Spreadsheet,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    system::tracing::initialize()?;
    let config = load_config()?;

    match cli.command {
        Some(Command::Convert {
            source,
            format,
            output,
        }) => convert(&config, source, format, output),
        Some(Command::Serve { port }) => serve(&config, port).await,
        None => serve(&config, None).await,
    }
}

fn convert(
    config: &Config,
    source: Option<PathBuf>,
    format: Option<SourceFormat>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let request = build_request(config, source, format, output);

    match ImportExecutor::new().run(&request) {
        Ok(summary) => {
            tracing::info!(
                "Conversion complete: {} records in {} collections",
                summary.row_count,
                summary.collection_count
            );
            Ok(())
        }
        Err(e) => {
            if let IngestionError::MissingRequiredColumns { found, .. } = &e {
                tracing::error!("Columns found in source: {}", found.join(", "));
            }
            tracing::error!("Conversion failed: {}", e);
            Err(e.into())
        }
    }
}

fn build_request(
    config: &Config,
    source: Option<PathBuf>,
    format: Option<SourceFormat>,
    output: Option<PathBuf>,
) -> ImportRequest {
    let source = source.unwrap_or_else(|| match format {
        Some(SourceFormat::Excel) => config.catalog.excel_source_path(),
        _ => config.catalog.csv_source_path(),
    });

    ImportRequest {
        source,
        kind: format.map(SchemaKind::from),
        output: output.unwrap_or_else(|| config.catalog.output_path()),
    }
}

async fn serve(config: &Config, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    let static_dir = PathBuf::from(&config.server.static_dir);
    let data_file = config.catalog.output_path();

    if !data_file.exists() {
        tracing::warn!(
            "{} not found, run `backend convert` first",
            data_file.display()
        );
    }

    let app = routes::configure_routes(&static_dir, &data_file);
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        toml::from_str(
            r#"
[catalog]
csv_source = "master.csv"
excel_source = "master.xlsx"
output = "public/data.json"

[server]
port = 3000
static_dir = "dist"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from(["backend", "convert", "--format", "excel"]).unwrap();
        match cli.command {
            Some(Command::Convert { format, source, .. }) => {
                assert_eq!(format, Some(SourceFormat::Excel));
                assert!(source.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["backend"]).unwrap().command.is_none());
    }

    #[test]
    fn test_build_request_defaults() {
        let config = config();

        let csv = build_request(&config, None, None, None);
        assert_eq!(csv.source, PathBuf::from("master.csv"));
        assert_eq!(csv.kind, None);
        assert_eq!(csv.output, PathBuf::from("public/data.json"));

        let excel = build_request(&config, None, Some(SourceFormat::Excel), None);
        assert_eq!(excel.source, PathBuf::from("master.xlsx"));
        assert_eq!(excel.kind, Some(SchemaKind::Spreadsheet));

        let explicit = build_request(
            &config,
            Some(PathBuf::from("other.csv")),
            None,
            Some(PathBuf::from("out.json")),
        );
        assert_eq!(explicit.source, PathBuf::from("other.csv"));
        assert_eq!(explicit.output, PathBuf::from("out.json"));
    }
}
