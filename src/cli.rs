use clap::Parser;
use std::path::PathBuf;

/// Lengthen files with the given suffix to a minimum size by appending
/// as many copies of another file as needed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Extension of the files to pad, without the leading dot (e.g. txt).
    #[arg(value_name = "SUFFIX")]
    pub suffix: String,

    /// File whose contents are appended to every matching file.
    #[arg(value_name = "FILE1")]
    pub file1: PathBuf,

    /// Minimum size in bytes each matching file must reach.
    #[arg(value_name = "SIZE")]
    pub size: u64,

    /// Directory to scan; defaults to the current working directory.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}
