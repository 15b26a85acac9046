//! sqlxml — project SQL parser output into attributed XML documents.
//!
//! # Usage
//!
//! ```bash
//! # Project parser output, recording the original source text
//! sqlxml project query.ast.json --source query.sql
//!
//! # Element counts per kind
//! sqlxml stats query.ast.json
//!
//! # Node kinds with an extraction rule
//! sqlxml kinds
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing_subscriber::EnvFilter;

use sqlxml::ast::NodeKind;
use sqlxml::config::{Config, OutputFormat};
use sqlxml::extractor::{Diagnostic, LanguageExtractor, ParserOutput, TsqlExtractor};
use sqlxml::prelude::*;

#[derive(Parser)]
#[command(name = "sqlxml")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Project SQL syntax trees into attributed XML documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlxml project ast.json --source q.sql   # XML document on stdout
    sqlxml project ast.json -f json -o q.json
    sqlxml stats ast.json                    # Element counts per kind
    cat ast.json | sqlxml project -          # Read parser output from stdin")]
struct Cli {
    /// Configuration file (default: ./sqlxml.toml, then the user config dir)
    #[arg(short, long, global = true, env = "SQLXML_CONFIG")]
    config: Option<PathBuf>,

    /// Log projection progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliFormat {
    Xml,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(val: CliFormat) -> Self {
        match val {
            CliFormat::Xml => OutputFormat::Xml,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Project parser output into a document
    Project {
        /// Parser output JSON (`-` for stdin)
        ast: PathBuf,
        /// Original source text, recorded on the root element
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Output format (overrides the configuration file)
        #[arg(short, long, value_enum)]
        format: Option<CliFormat>,
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Language tag for the root element
        #[arg(short, long)]
        language: Option<String>,
        /// Never record the source text
        #[arg(long)]
        no_source: bool,
    },
    /// Show element counts per kind, total and depth
    Stats {
        /// Parser output JSON (`-` for stdin)
        ast: PathBuf,
    },
    /// List node kinds with an extraction rule
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::discover(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Project {
            ast,
            source,
            format,
            output,
            language,
            no_source,
        } => {
            if let Some(format) = format {
                config.output.format = format.into();
            }
            if let Some(language) = language {
                config.document.language = language;
            }
            if no_source {
                config.document.include_source = false;
            }
            project(&config, &ast, source.as_deref(), output.as_deref())
        }
        Commands::Stats { ast } => stats(&config, &ast),
        Commands::Kinds => {
            show_kinds();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sqlxml=debug" } else { "sqlxml=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn load_parser_output(path: &Path) -> Result<ParserOutput> {
    let input = read_input(path)?;
    ParserOutput::from_json(&input).with_context(|| format!("parsing {}", path.display()))
}

fn report(diagnostics: &[Diagnostic]) -> ! {
    for diagnostic in diagnostics {
        eprintln!(
            "{} {} {}",
            format!("{}:{}", diagnostic.line, diagnostic.column).dimmed(),
            diagnostic.severity.to_string().red().bold(),
            diagnostic
        );
    }
    eprintln!("{} {} parse error(s), no document written", "✗".red(), diagnostics.len());
    std::process::exit(1);
}

fn project(config: &Config, ast: &Path, source: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let parsed = load_parser_output(ast)?;
    let source = source.map(read_input).transpose()?;

    let extractor = TsqlExtractor::from_config(config.projector());
    let extraction = extractor.extract(source.as_deref(), parsed)?;
    let Some(document) = extraction.document else {
        report(&extraction.diagnostics);
    };

    let rendered = match config.output.format {
        OutputFormat::Xml => document.to_xml_with(&XmlOptions::from(&config.output)),
        OutputFormat::Json if config.output.indent == 0 => serde_json::to_string(&document)?,
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "{} {} elements written to {}",
                "✓".green(),
                document.tree().count(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn stats(config: &Config, ast: &Path) -> Result<()> {
    let parsed = load_parser_output(ast)?;
    if parsed.has_errors() {
        let diagnostics: Vec<_> = parsed.errors.iter().map(Diagnostic::from).collect();
        report(&diagnostics);
    }
    let root = parsed
        .ast
        .context("parser output has neither an AST nor errors")?;

    let tree = Projector::from_config(config.projector()).project_node(&root)?;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for element in tree.descendants() {
        *counts.entry(element.name()).or_default() += 1;
    }

    println!("{}", "Elements by kind:".cyan().bold());
    for (kind, count) in &counts {
        println!("  {:>6}  {}", count.to_string().yellow(), kind);
    }
    println!();
    println!("{} {}", "Total elements:".green(), tree.count());
    println!("{} {}", "Distinct kinds:".green(), counts.len());
    println!("{} {}", "Max depth:".green(), tree.depth());
    Ok(())
}

fn show_kinds() {
    let mut kinds = NodeKind::KNOWN.to_vec();
    kinds.sort_unstable();
    for kind in &kinds {
        println!("{kind}");
    }
    eprintln!(
        "{} {} kinds with extraction rules; others project with position attributes only",
        "ℹ".blue(),
        kinds.len()
    );
}
