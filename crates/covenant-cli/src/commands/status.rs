//! Status command implementation.

use crate::error::Result;
use crate::output::Formatter;
use covenant_extractor::ObligationExtractor;

/// Execute the status command.
pub fn execute_status(formatter: &Formatter) -> Result<()> {
    let extractor = ObligationExtractor::from_env();
    let status = extractor.system_status();
    println!("{}", formatter.format_status(&status)?);
    Ok(())
}
