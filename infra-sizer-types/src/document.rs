//! Page model shared by the document exporters.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{ReportRow, ReportSection};

/// Base name of the exported report.
pub const DEFAULT_FILE_STEM: &str = "Infra_Sizer_Report";

/// Header row of every table.
pub const TABLE_HEADER: [&str; 2] = ["Key", "Value"];

/// Output formats of the bundled exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// PDF compiled from LaTeX.
    #[default]
    Pdf,
    /// LaTeX source.
    Latex,
    /// Printable HTML, one page per section when printed.
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Latex => "tex",
            ExportFormat::Html => "html",
        }
    }

    /// `Infra_Sizer_Report.<ext>`.
    pub fn default_file_name(&self) -> PathBuf {
        PathBuf::from(format!("{DEFAULT_FILE_STEM}.{}", self.extension()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Latex => write!(f, "latex"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

/// Error for an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported export format: {0}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "latex" | "tex" => Ok(ExportFormat::Latex),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}

/// Visual conventions of the exported document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStyle {
    /// Page title size, bold.
    pub title_font_pt: f32,
    /// Table body size.
    pub body_font_pt: f32,
    /// Padding inside each table cell.
    pub cell_padding_pt: f32,
    /// Header row fill, RGB.
    pub header_fill: [u8; 3],
    /// Fill of every other body row, RGB.
    pub stripe_fill: [u8; 3],
    /// Whether body rows alternate fills.
    pub striped: bool,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            title_font_pt: 12.0,
            body_font_pt: 10.0,
            cell_padding_pt: 3.0,
            header_fill: [240, 240, 240],
            stripe_fill: [245, 245, 245],
            striped: true,
        }
    }
}

impl DocumentStyle {
    /// `#rrggbb` form of an RGB triple.
    pub fn hex(rgb: [u8; 3]) -> String {
        format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
    }
}

/// One page of the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    pub title: &'a str,
    pub rows: &'a [ReportRow],
}

impl Page<'_> {
    /// Whether this page must start with a page break.
    pub fn breaks_before(&self) -> bool {
        self.number > 1
    }
}

/// Lay sections out one per page, in order.
pub fn paginate(sections: &[ReportSection]) -> Vec<Page<'_>> {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| Page {
            number: i + 1,
            title: &section.title,
            rows: &section.rows,
        })
        .collect()
}
