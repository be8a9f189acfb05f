//! `sbvr2owl`: translates an SBVR business vocabulary document into an OWL ontology.
//!
//! **Outputs:**
//! - `<output>`: the ontology, as RDF/XML (default), Turtle or JSON-LD
//!
//! **Usage:**
//! ```
//! sbvr2owl [--input <path>] [--output <path>] [--prefix <iri>] [--format <rdfxml|turtle|jsonld>]
//!          [--config <path>] [--interactive] [--verbose | --quiet]
//! ```
//!
//! Settings not given on the command line are taken from the config file
//! (`sbvr2owl.toml` when present) and then from built-in defaults.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sbvr_owl_clients::config::DEFAULT_CONFIG;
use sbvr_owl_clients::{logging, prompt, FileConfig, Overrides, Settings};
use sbvr_owl_mapping::map_vocabulary;
use sbvr_owl_ontology::inventory;
use sbvr_owl_ontology::serializer::{self, Format};
use sbvr_vocabulary::Vocabulary;
use tracing::{debug, info, warn};

/// Translate an SBVR vocabulary into an OWL ontology.
#[derive(Parser)]
#[command(
    name = "sbvr2owl",
    version,
    about = "Translate an SBVR business vocabulary into an OWL ontology"
)]
struct Args {
    /// SBVR document to read [default: sbvr.xml].
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Ontology document to write [default: ontology.owl].
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Namespace prefix of the ontology; every entity is named `<prefix>#<name>`.
    #[arg(short, long)]
    prefix: Option<String>,

    /// Output format: rdfxml, turtle or jsonld [default: rdfxml].
    #[arg(short, long)]
    format: Option<Format>,

    /// Configuration file. Without this flag `sbvr2owl.toml` is read if present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ask for the input, output and prefix on the terminal.
    #[arg(long)]
    interactive: bool,

    /// Log every term as it is read and mapped.
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(logging::level(args.verbose, args.quiet))?;

    let file = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::from_optional_file(Path::new(DEFAULT_CONFIG))?,
    };
    let overrides = Overrides {
        input: args.input,
        output: args.output,
        prefix: args.prefix,
        format: args.format,
    };
    let mut settings = Settings::resolve(&overrides, &file)?;
    if args.interactive {
        settings = prompt::ask_settings(&mut io::stdin().lock(), &mut io::stdout(), settings)
            .context("Failed to read answers from the terminal")?;
    }
    debug!(?settings, "resolved settings");

    let input = &settings.input;
    info!(input = %input.display(), "reading vocabulary");
    let vocabulary = Vocabulary::from_xml_file(input)
        .with_context(|| format!("Failed to read SBVR document {}", input.display()))?;
    info!(
        concepts = vocabulary.concept_count(),
        verbs = vocabulary.verb_count(),
        "vocabulary read"
    );

    let model = map_vocabulary(&vocabulary, &settings.prefix)
        .with_context(|| format!("Failed to map {}", input.display()))?;
    let text = serializer::render(&model, settings.format);

    let counts = model.inventory();
    if settings.format == Format::RdfXml {
        let reread = inventory::read_rdfxml(&text)
            .context("Failed to re-read the generated RDF/XML document")?;
        if reread != counts {
            warn!(%reread, expected = %counts, "serialized declarations differ from the model");
        }
    }

    let output = &settings.output;
    fs::write(output, &text).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Ontology {}: {}", settings.prefix, counts);
    println!("  Written: {} ({})", output.display(), settings.format);

    Ok(())
}
