//! Covenant Extractor
//!
//! The obligation-extraction pipeline: validates input, acquires contract
//! text, invokes the LLM gateway with ordered dual-provider fallback,
//! strictly validates the semi-structured model output, post-processes the
//! surviving records, and assembles a result envelope with risk statistics.
//!
//! # Architecture
//!
//! ```text
//! bytes + type -> covenant-document -> contract text
//!               -> LlmGateway (OpenAI, then Gemini) -> raw model text
//!               -> response parser/validator -> obligation candidates
//!               -> post-processing -> ExtractionResult envelope
//! ```
//!
//! The pipeline is a pure function of (bytes, file type, settings): no
//! state survives a request, and [`ObligationExtractor::process_contract`]
//! never returns an error to its caller; every failure path lands in the
//! envelope's `success = false` branch.
//!
//! # Example Usage
//!
//! ```no_run
//! use covenant_extractor::{ObligationExtractor, Settings};
//!
//! # async fn example() {
//! let extractor = ObligationExtractor::new(Settings::from_env());
//!
//! let result = extractor
//!     .process_contract(b"The Vendor shall deliver...", "txt")
//!     .await;
//!
//! if result.success {
//!     println!("extracted {} obligations", result.total_obligations);
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod gateway;
mod parser;
mod prompt;
mod report;
mod types;


pub use config::Settings;
pub use error::ExtractorError;
pub use extractor::ObligationExtractor;
pub use gateway::{GatewayError, LlmGateway};
pub use report::{summary_report, to_csv};
pub use types::{ApiStatus, ExtractionResult, ObligationCandidate, SystemStatus};
