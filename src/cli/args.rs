//! Command line argument definitions
//!
//! The input path is optional at the clap level so that a missing path
//! surfaces as the converter's own error instead of a clap usage error,
//! keeping the reporting consistent with the rest of the error taxonomy.

use clap::Parser;

/// HC Encoder matrices to CCE SP3 matrices converter
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the matrix to read
    #[clap(short, long)]
    pub input_file: Option<String>,

    /// Name of newly created matrix
    #[clap(short, long)]
    pub name: Option<String>,

    /// Path to the matrix to write (stdout when omitted)
    #[clap(short, long)]
    pub output_file: Option<String>,

    /// Enable verbose output
    #[clap(short, long)]
    pub verbose: bool,
}

/// Fix up an output path: append `.xml` unless the path already mentions
/// xml somewhere.
pub fn fix_output_name(name: &str) -> String {
    if name.contains("xml") {
        name.to_string()
    } else {
        format!("{}.xml", name)
    }
}
