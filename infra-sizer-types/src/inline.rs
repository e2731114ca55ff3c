use crate::ReportSection;

pub const REPORT_HEADING: &str = "Your Report is Ready!";
pub const EXPORT_LABEL: &str = "Download Report (PDF)";

/// A section as shown on screen: a title and a bullet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Everything a frontend needs to show the finished report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineReport {
    pub heading: String,
    pub sections: Vec<InlineSection>,
    pub export_label: String,
}

impl InlineReport {
    pub fn new(sections: &[ReportSection]) -> Self {
        Self {
            heading: REPORT_HEADING.to_string(),
            sections: render_inline(sections),
            export_label: EXPORT_LABEL.to_string(),
        }
    }

    pub fn with_export_label(mut self, label: impl Into<String>) -> Self {
        self.export_label = label.into();
        self
    }
}

/// Map sections to titled lists of `"key: value"` or phrased items.
pub fn render_inline(sections: &[ReportSection]) -> Vec<InlineSection> {
    sections
        .iter()
        .map(|section| InlineSection {
            title: section.title.clone(),
            items: section.rows.iter().map(|row| row.inline_text()).collect(),
        })
        .collect()
}
