//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use typegen_model::load_type_map;

use crate::backend::{EmitConfig, Generator, OverrideRules};

use super::{CliError, CliResult, ExitCode};

/// Maximum input file size (10 MB)
const MAX_INPUT_SIZE: u64 = 10 * 1024 * 1024;

/// Options of the `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub reserve: Vec<String>,
    pub overrides: Option<PathBuf>,
    pub header: bool,
    /// Extra derives appended to the default list
    pub derives: Vec<String>,
    pub check: bool,
}

/// Read a UTF-8 input file, refusing anything over `MAX_INPUT_SIZE`.
pub fn read_input(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(CliError::failure(format!(
            "Input file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_INPUT_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Load the model and override rules, then run one generation pass.
pub fn generate_source(options: &GenerateOptions) -> CliResult<String> {
    let model = read_input(&options.input)?;
    let types = load_type_map(&model)
        .map_err(|e| CliError::failure(format!("Error loading '{}': {}", options.input.display(), e)))?;

    let rules = match &options.overrides {
        Some(path) => OverrideRules::from_json(&read_input(path)?)
            .map_err(|e| CliError::failure(format!("Invalid override rules '{}': {}", path.display(), e)))?,
        None => OverrideRules::default(),
    };

    let config = options
        .derives
        .iter()
        .fold(EmitConfig::new().with_header(options.header), |config, derive| {
            config.with_extra_derive(derive.as_str())
        });

    tracing::info!(
        input = %options.input.display(),
        roots = types.len(),
        overrides = !rules.is_empty(),
        "generating"
    );

    let generated = Generator::new(&types, &options.reserve)
        .with_override(rules)
        .with_config(config)
        .generate()
        .map_err(|e| CliError::failure(format!("Code generation error: {}", e)))?;

    Ok(generated.into_source())
}

/// `typegen generate`: write the generated file, print it, or check an existing one.
pub fn generate_file(options: &GenerateOptions) -> CliResult<ExitCode> {
    let source = generate_source(options)?;

    match (&options.output, options.check) {
        (Some(path), true) => {
            // A missing output file is stale; any other read failure is an error.
            let existing = match fs::read_to_string(path) {
                Ok(existing) => Some(existing),
                Err(e) if e.kind() == io::ErrorKind::NotFound => None,
                Err(e) => {
                    return Err(CliError::failure(format!("Error reading '{}': {}", path.display(), e)));
                }
            };
            if existing.as_deref() == Some(source.as_str()) {
                println!("✓ {} is up to date", path.display());
                Ok(ExitCode::SUCCESS)
            } else {
                Err(CliError::new(
                    format!("{} is out of date; rerun `typegen generate` without --check", path.display()),
                    ExitCode::STALE,
                ))
            }
        }
        (Some(path), false) => {
            fs::write(path, &source)
                .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
            tracing::info!(output = %path.display(), bytes = source.len(), "wrote generated code");
            Ok(ExitCode::SUCCESS)
        }
        (None, _) => {
            io::stdout()
                .write_all(source.as_bytes())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
