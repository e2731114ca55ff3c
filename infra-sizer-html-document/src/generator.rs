//! HTML report generator implementation.

use infra_sizer::{DocumentStyle, Page, ReportSection, TABLE_HEADER, paginate};

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Fonts, padding and fills for the tables.
    pub style: DocumentStyle,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: Some(crate::DOCUMENT_TITLE.to_string()),
            include_styles: true,
            full_document: true,
            class_prefix: "report".to_string(),
            style: DocumentStyle::default(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the report fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }
}

/// Generate a printable HTML report with default options.
pub fn to_html(sections: &[ReportSection]) -> String {
    to_html_with_options(sections, &HtmlOptions::new())
}

/// Generate a printable HTML report with custom options.
///
/// Each section becomes a `<section>` holding a title and a two-column
/// table. Every section after the first starts on a new printed page.
pub fn to_html_with_options(sections: &[ReportSection], options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix, &options.style));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<main class=\"{prefix}\">\n"));
    for page in paginate(sections) {
        html.push_str(&generate_page(&page, prefix));
    }
    html.push_str("</main>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

fn generate_page(page: &Page<'_>, prefix: &str) -> String {
    let mut s = String::new();

    let class = if page.breaks_before() {
        format!("{prefix}-page {prefix}-break")
    } else {
        format!("{prefix}-page")
    };
    s.push_str(&format!(
        "  <section class=\"{class}\" data-page=\"{}\">\n",
        page.number
    ));
    s.push_str(&format!(
        "    <h2 class=\"{prefix}-title\">{}</h2>\n",
        escape_html(page.title)
    ));
    s.push_str(&format!("    <table class=\"{prefix}-table\">\n"));
    s.push_str(&format!(
        "      <thead><tr><th>{}</th><th>{}</th></tr></thead>\n",
        TABLE_HEADER[0], TABLE_HEADER[1]
    ));
    s.push_str("      <tbody>\n");
    for row in page.rows {
        s.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&row.key),
            escape_html(&row.value)
        ));
    }
    s.push_str("      </tbody>\n    </table>\n  </section>\n");
    s
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str, style: &DocumentStyle) -> String {
    let header_fill = DocumentStyle::hex(style.header_fill);
    let stripe = if style.striped {
        format!(
            "    .{prefix}-table tbody tr:nth-child(even) {{\n      background: {};\n    }}\n",
            DocumentStyle::hex(style.stripe_fill)
        )
    } else {
        String::new()
    };

    format!(
        r#"  <style>
    .{prefix} {{
      max-width: 800px;
      margin: 2rem auto;
      font-family: Helvetica, Arial, sans-serif;
    }}
    .{prefix}-title {{
      font-size: {title}pt;
      font-weight: bold;
    }}
    .{prefix}-table {{
      width: 100%;
      border-collapse: collapse;
      font-size: {body}pt;
    }}
    .{prefix}-table th, .{prefix}-table td {{
      border: 1px solid #999;
      padding: {padding}pt;
      text-align: left;
    }}
    .{prefix}-table thead tr {{
      background: {header_fill};
    }}
{stripe}    @media print {{
      .{prefix}-break {{
        page-break-before: always;
        break-before: page;
      }}
    }}
  </style>
"#,
        title = style.title_font_pt,
        body = style.body_font_pt,
        padding = style.cell_padding_pt,
    )
}
