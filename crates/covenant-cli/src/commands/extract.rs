//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use covenant_extractor::{ObligationExtractor, Settings};
use std::path::Path;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let settings = Settings::from_env();

    let bytes = std::fs::read(&args.file)?;
    if bytes.len() > settings.max_file_size {
        return Err(CliError::FileTooLarge {
            size: bytes.len(),
            limit: settings.max_file_size,
        });
    }

    let declared_type = match &args.file_type {
        Some(file_type) => file_type.clone(),
        None => declared_type_from_path(&args.file)?,
    };

    let extractor = ObligationExtractor::new(settings);
    let result = extractor.process_contract(&bytes, &declared_type).await;

    if !result.success {
        let cause = result
            .error
            .unwrap_or_else(|| "unknown failure".to_string());
        return Err(CliError::Extraction(cause));
    }

    let rendered = formatter.format_result(&result)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} obligations to {}",
                    result.total_obligations,
                    path.display()
                ))
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn declared_type_from_path(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::InvalidInput(format!(
                "cannot infer file type of {}; pass --file-type",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_from_path() {
        assert_eq!(
            declared_type_from_path(Path::new("contract.pdf")).unwrap(),
            "pdf"
        );
        assert_eq!(
            declared_type_from_path(Path::new("dir/notes.txt")).unwrap(),
            "txt"
        );
        assert!(declared_type_from_path(Path::new("no_extension")).is_err());
    }
}
