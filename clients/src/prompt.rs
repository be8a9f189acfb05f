//! Interactive prompts for the translator settings.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::Settings;

/// Asks for one value, showing `default`. A blank answer keeps the default.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> io::Result<String> {
    write!(output, "{question} [{default}]: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_owned()
    } else {
        answer.to_owned()
    })
}

/// Asks for the input path, output path and prefix, keeping each current
/// value on a blank answer.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn ask_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: Settings,
) -> io::Result<Settings> {
    let source = ask(
        input,
        output,
        "SBVR input file",
        &settings.input.display().to_string(),
    )?;
    let target = ask(
        input,
        output,
        "OWL output file",
        &settings.output.display().to_string(),
    )?;
    let prefix = ask(input, output, "Ontology prefix", &settings.prefix)?;
    Ok(Settings {
        input: PathBuf::from(source),
        output: PathBuf::from(target),
        prefix,
        ..settings
    })
}
