//! CLI orchestration
//!
//! Wires the parsed arguments to the conversion pipeline: input path
//! checks, file read, conversion, and output dispatch to stdout or a
//! file. Aborts on the first error; nothing is written on failure.

use std::fs;
use std::path::Path;

use crate::cli::args::{fix_output_name, CliArgs};
use crate::cli::errors::CliError;
use crate::converters::hc_to_cce::convert_hc_matrix;

/// Run a full conversion for the given arguments.
pub fn run(args: CliArgs) -> Result<(), CliError> {
    let input_file = args
        .input_file
        .as_deref()
        .filter(|path| !path.is_empty())
        .ok_or(CliError::EmptyInputPath)?;

    // Substring match, same acceptance as the HC Encoder tooling.
    if !input_file.contains(".mtx") {
        return Err(CliError::UnsupportedExtension);
    }

    if !Path::new(input_file).is_file() {
        return Err(CliError::UnreadableInput {
            path: input_file.to_string(),
        });
    }

    log::info!("parsing input from \"{}\"", input_file);
    let content = fs::read_to_string(input_file).map_err(|_| CliError::UnreadableInput {
        path: input_file.to_string(),
    })?;

    log::info!("creating new CCE compatible matrix");
    let document = convert_hc_matrix(&content, args.name.as_deref())?;

    match args.output_file.as_deref() {
        Some(output_file) => {
            let output_path = fix_output_name(output_file);
            log::info!("writing generated matrix to \"{}\"", output_path);
            fs::write(&output_path, &document).map_err(|source| CliError::WriteFailure {
                path: output_path.clone(),
                source,
            })?;
        }
        None => {
            log::info!("printing generated matrix");
            println!("{}", document);
        }
    }

    Ok(())
}
