//! sheetcards CLI
//!
//! 固定のURLから商品シートを1回取得し、カードを描画したページを書き出す。

use std::fs::File;
use std::io::{self, BufWriter};
use std::process;

use sheetcards::{CatalogBuilder, CatalogError, Container, OutputFormat, PageOutcome};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, PartialEq)]
struct Options {
    output: String,
    format: OutputFormat,
    input: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
}

fn usage(program: &str, code: i32) -> ! {
    eprintln!("Usage: {} [output.html] [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  --format <page|fragment|json>  Output format (default: page)");
    eprintln!("  --input <file.csv>             Render a local CSV instead of fetching the sheet");
    eprintln!("  -h, --help                     Show this help");
    eprintln!("\nExamples:");
    eprintln!("  {} index.html", program);
    eprintln!("  {} - --format json", program);
    eprintln!("  {} preview.html --input products.csv", program);
    process::exit(code);
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options {
        output: "-".to_string(),
        format: OutputFormat::Page,
        input: None,
    };

    let mut positional_seen = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--format" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--format requires a value".to_string())?;
                options.format = value.parse().map_err(|e: CatalogError| e.to_string())?;
                i += 2;
            }
            "--input" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--input requires a value".to_string())?;
                options.input = Some(value.clone());
                i += 2;
            }
            arg if arg.starts_with("--") => return Err(format!("Unknown option: {}", arg)),
            arg if !positional_seen => {
                options.output = arg.to_string();
                positional_seen = true;
                i += 1;
            }
            arg => return Err(format!("Unexpected argument: {}", arg)),
        }
    }

    Ok(Command::Run(options))
}

fn write_output(
    catalog: &sheetcards::Catalog,
    container: &Container,
    output: &str,
) -> Result<(), CatalogError> {
    if output == "-" {
        catalog.write_output(container, io::stdout().lock())
    } else {
        let file = File::create(output)?;
        catalog.write_output(container, BufWriter::new(file))
    }
}

#[tokio::main]
async fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sheetcards");
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => usage(program, 0),
        Err(msg) => {
            eprintln!("Error: {}", msg);
            usage(program, 1);
        }
    };

    let catalog = match CatalogBuilder::new().with_output_format(options.format).build() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            process::exit(1);
        }
    };

    let mut container = catalog.new_container();
    let outcome = match &options.input {
        Some(path) => catalog.run_from_file(path, &mut container),
        None => catalog.run(&mut container).await,
    };

    if let Err(e) = write_output(&catalog, &container, &options.output) {
        error!(error = %e, output = %options.output, "failed to write output");
        process::exit(1);
    }

    match outcome {
        PageOutcome::Rendered(cards) => info!(cards, output = %options.output, "done"),
        PageOutcome::Empty => info!(output = %options.output, "done (no products)"),
        PageOutcome::Failed(_) => process::exit(1),
    }
}
