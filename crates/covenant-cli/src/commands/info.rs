//! Info command implementation.

use crate::cli::InfoArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use covenant_document::{pdf_info, FileType};

/// Execute the info command.
pub fn execute_info(args: InfoArgs, formatter: &Formatter) -> Result<()> {
    let extension = args
        .file
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    let file_type = FileType::from_extension(extension).ok_or_else(|| {
        CliError::InvalidInput(format!("unsupported file type: {}", extension))
    })?;

    let bytes = std::fs::read(&args.file)?;
    match file_type {
        FileType::Pdf => {
            let info = pdf_info(&bytes);
            println!("{}", formatter.format_pdf_info(&info)?);
        }
        FileType::Txt => {
            let text = String::from_utf8_lossy(&bytes);
            println!("File size: {} bytes", bytes.len());
            println!("Characters: {}", text.chars().count());
            println!("Words: {}", text.split_whitespace().count());
        }
    }
    Ok(())
}
