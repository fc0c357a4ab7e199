//! Print Planning - pagination and job assembly for badge runs
//!
//! This crate provides:
//! - Page formats with per-format badge capacity defaults
//! - Print plans: page counts, capacities and advisory layout grids
//! - Job assembly: every badge copy rendered and grouped by page
//! - An export seam for host print bridges
//!
//! # Example
//!
//! ```ignore
//! use print::{plan, PageFormat, PrintOptions};
//! use template::Template;
//!
//! let badge = Template::from_preset(template::Preset::ConferenceBadge);
//! let options = PrintOptions::new(PageFormat::A4, 30);
//! let plan = plan(&badge, &options);
//! assert_eq!(plan.page_count, 4);
//! ```

mod job;
mod plan;

pub use job::{
    build_job, build_job_batch, CopyGroup, ExportAck, ExportBackend, PrintJob, SymbolEncoder,
};
pub use plan::{plan, GridHint, Margins, PageFormat, PrintOptions, PrintPlan, PrintQuality};

use thiserror::Error;

/// Errors that can occur while planning or exporting a print run
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Batch has no contexts to print")]
    EmptyBatch,

    #[error("Symbol encoding failed: {0}")]
    EncodeError(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    #[error("Layout error: {0}")]
    LayoutError(#[from] layout_core::LayoutError),
}

/// Result type for print operations
pub type Result<T> = std::result::Result<T, PrintError>;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
