//! Print run planning
//!
//! A plan is pure arithmetic over the template and the print options: how
//! many pages, how many badges on each, and an advisory grid for laying
//! them out. Counts below one are clamped to one rather than rejected, so
//! a plan always exists for whatever the print dialog sends.

use layout_core::Point;
use serde::{Deserialize, Serialize};
use template::Template;

/// Paper formats offered by the print dialog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PageFormat {
    /// A4 sheet, 210 x 297 mm
    A4,

    /// A3 sheet, 297 x 420 mm
    A3,

    /// One badge per sheet, at the template's own size
    SingleBadge,

    /// ID-1 card stock, 85.6 x 54 mm
    Card,
}

impl PageFormat {
    /// Default badge capacity per page for this format
    pub fn default_badges_per_page(&self) -> u32 {
        match self {
            PageFormat::A4 => 8,
            PageFormat::A3 => 16,
            PageFormat::SingleBadge => 1,
            PageFormat::Card => 1,
        }
    }

    /// Physical page size in millimeters
    ///
    /// `SingleBadge` pages take the template's own canvas size.
    pub fn dimensions_mm(&self, template: &Template) -> (f64, f64) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::A3 => (297.0, 420.0),
            PageFormat::SingleBadge => (template.width, template.height),
            PageFormat::Card => (85.6, 54.0),
        }
    }
}

/// Output quality, mapped to a raster density hint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrintQuality {
    /// 150 dpi, fast proofs
    Draft,

    /// 300 dpi, the usual run
    #[default]
    Normal,

    /// 600 dpi, photo badges
    High,
}

impl PrintQuality {
    /// Raster density hint in dots per inch
    pub fn dpi(&self) -> f64 {
        match self {
            PrintQuality::Draft => 150.0,
            PrintQuality::Normal => 300.0,
            PrintQuality::High => 600.0,
        }
    }
}

/// Page margins in millimeters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    /// Top margin
    pub top: f64,

    /// Right margin
    pub right: f64,

    /// Bottom margin
    pub bottom: f64,

    /// Left margin
    pub left: f64,
}

impl Margins {
    /// Uniform margins on all four edges
    pub fn uniform(mm: f64) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

/// Options collected from the print dialog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrintOptions {
    /// Target paper format
    pub format: PageFormat,

    /// Number of badge copies; values below 1 are treated as 1
    pub copies: u32,

    /// Capacity override; `None` takes the format default
    #[serde(rename = "badgesPerPage")]
    #[serde(default)]
    pub badges_per_page: Option<u32>,

    /// Output quality
    #[serde(default)]
    pub quality: PrintQuality,

    /// Color output; false prints grayscale
    #[serde(default = "default_color")]
    pub color: bool,

    /// Print both sides of the sheet
    #[serde(default)]
    pub duplex: bool,

    /// Page margins
    #[serde(default)]
    pub margins: Margins,
}

impl PrintOptions {
    /// Options with format defaults for everything but the copy count
    pub fn new(format: PageFormat, copies: u32) -> Self {
        Self {
            format,
            copies,
            badges_per_page: None,
            quality: PrintQuality::default(),
            color: true,
            duplex: false,
            margins: Margins::default(),
        }
    }

    /// Builder-style capacity override
    pub fn with_badges_per_page(mut self, badges_per_page: u32) -> Self {
        self.badges_per_page = Some(badges_per_page);
        self
    }

    /// Builder-style quality setter
    pub fn with_quality(mut self, quality: PrintQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Builder-style margin setter
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

fn default_color() -> bool {
    true
}

/// Advisory layout grid for one page
///
/// Chosen to waste as few cells as possible while tracking the page's
/// aspect ratio. Consumers are free to ignore it; the plan's counts are
/// the contract, the grid is a suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridHint {
    /// Badge columns across the page
    pub columns: u32,

    /// Badge rows down the page
    pub rows: u32,
}

impl GridHint {
    /// Pick a grid for `count` badges on a `page_width` x `page_height` page
    pub fn for_page(count: u32, page_width: f64, page_height: f64) -> Self {
        let count = count.max(1);
        let page_aspect = page_width / page_height;

        let mut best = GridHint {
            columns: 1,
            rows: count,
        };
        let mut best_waste = u32::MAX;
        let mut best_distance = f64::INFINITY;
        for columns in 1..=count {
            let rows = count.div_ceil(columns);
            let waste = columns * rows - count;
            let distance = (columns as f64 / rows as f64 - page_aspect).abs();
            if waste < best_waste || (waste == best_waste && distance < best_distance) {
                best = GridHint { columns, rows };
                best_waste = waste;
                best_distance = distance;
            }
        }
        best
    }

    /// Top-left corner of every slot cell, in page millimeters
    ///
    /// Slots run left to right, then top to bottom, tiling the printable
    /// area left inside the margins. Advisory in the same way the grid is.
    pub fn slot_origins(&self, page_width: f64, page_height: f64, margins: &Margins) -> Vec<Point> {
        let printable_width = (page_width - margins.left - margins.right).max(0.0);
        let printable_height = (page_height - margins.top - margins.bottom).max(0.0);
        let cell_width = printable_width / self.columns as f64;
        let cell_height = printable_height / self.rows as f64;

        (0..self.rows * self.columns)
            .map(|slot| {
                let column = slot % self.columns;
                let row = slot / self.columns;
                Point::new(
                    margins.left + column as f64 * cell_width,
                    margins.top + row as f64 * cell_height,
                )
            })
            .collect()
    }
}

/// A fully computed print run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrintPlan {
    /// Target paper format
    pub format: PageFormat,

    /// Page width in millimeters
    #[serde(rename = "pageWidth")]
    pub page_width: f64,

    /// Page height in millimeters
    #[serde(rename = "pageHeight")]
    pub page_height: f64,

    /// Badge copies in the run, after clamping
    pub copies: u32,

    /// Badge capacity per page, after clamping
    #[serde(rename = "badgesPerPage")]
    pub badges_per_page: u32,

    /// Total pages
    #[serde(rename = "pageCount")]
    pub page_count: u32,

    /// Badges on the final page
    #[serde(rename = "lastPageCount")]
    pub last_page_count: u32,

    /// Advisory layout grid
    pub grid: GridHint,

    /// Slot origin for each badge cell on a sheet, in page millimeters
    #[serde(rename = "perCopyOffset")]
    pub per_copy_offsets: Vec<Point>,

    /// Output quality carried through to the export
    pub quality: PrintQuality,

    /// Color flag carried through to the export
    pub color: bool,

    /// Duplex flag carried through to the export
    pub duplex: bool,

    /// Margins carried through to the export
    pub margins: Margins,
}

/// Compute the print plan for a template and a set of options
///
/// Total: every input produces a plan. Copy and capacity counts below one
/// clamp to one.
pub fn plan(template: &Template, options: &PrintOptions) -> PrintPlan {
    let copies = options.copies.max(1);
    let badges_per_page = options
        .badges_per_page
        .unwrap_or_else(|| options.format.default_badges_per_page())
        .max(1);
    let page_count = copies.div_ceil(badges_per_page);
    let last_page_count = copies - (page_count - 1) * badges_per_page;
    let (page_width, page_height) = options.format.dimensions_mm(template);
    let grid = GridHint::for_page(badges_per_page, page_width, page_height);
    let per_copy_offsets = grid.slot_origins(page_width, page_height, &options.margins);

    PrintPlan {
        format: options.format,
        page_width,
        page_height,
        copies,
        badges_per_page,
        page_count,
        last_page_count,
        grid,
        per_copy_offsets,
        quality: options.quality,
        color: options.color,
        duplex: options.duplex,
        margins: options.margins,
    }
}
