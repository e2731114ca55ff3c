//! LaTeX exporter for infra-sizer: renders the report sections as a LaTeX
//! document, one page per section, and optionally compiles it to PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use infra_sizer::{
    DocumentExporter, DocumentStyle, ExportError, Page, ReportSection, TABLE_HEADER, paginate,
    write_atomically,
};
use tracing::{debug, info};

/// Compilers tried in order when none is set explicitly. The first two
/// handle any Unicode text; `pdflatex` only covers Latin scripts.
pub const ENGINES: [&str; 3] = ["xelatex", "lualatex", "pdflatex"];

/// Escape special LaTeX characters in text content.
pub fn escape_latex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

fn rgb(fill: [u8; 3]) -> String {
    format!("{},{},{}", fill[0], fill[1], fill[2])
}

fn font(size_pt: f32) -> String {
    format!("\\fontsize{{{:.1}pt}}{{{:.1}pt}}\\selectfont", size_pt, size_pt * 1.2)
}

/// Generate a LaTeX document (as a String) with one page per report section.
pub fn to_latex(sections: &[ReportSection], style: &DocumentStyle) -> String {
    let mut latex = String::new();

    latex.push_str(
        r#"\documentclass{article}
\usepackage{iftex}
\ifPDFTeX
  \usepackage[utf8]{inputenc}
  \usepackage[T1]{fontenc}
\else
  \usepackage{fontspec}
  \ifXeTeX
    \usepackage{xeCJK}
  \else
    \usepackage{luatexja-fontspec}
  \fi
\fi
\usepackage{geometry}
\usepackage[table]{xcolor}
\usepackage{longtable}
\usepackage{array}

\geometry{margin=1in}
\pagestyle{empty}
"#,
    );
    latex.push_str(&format!(
        "\\definecolor{{headerfill}}{{RGB}}{{{}}}\n",
        rgb(style.header_fill)
    ));
    latex.push_str(&format!(
        "\\definecolor{{stripefill}}{{RGB}}{{{}}}\n",
        rgb(style.stripe_fill)
    ));
    latex.push_str(&format!(
        "\\setlength{{\\tabcolsep}}{{{:.1}pt}}\n",
        style.cell_padding_pt
    ));
    latex.push_str("\n\\begin{document}\n");

    for page in paginate(sections) {
        latex.push_str(&render_page(&page, style));
    }

    latex.push_str("\n\\end{document}\n");
    latex
}

fn render_page(page: &Page<'_>, style: &DocumentStyle) -> String {
    let mut s = String::new();

    if page.breaks_before() {
        s.push_str("\n\\newpage\n");
    }

    s.push_str("\n\\noindent{");
    s.push_str(&font(style.title_font_pt));
    s.push_str("\\textbf{");
    s.push_str(&escape_latex(page.title));
    s.push_str("}}\n\n\\medskip\n\n");

    s.push('{');
    s.push_str(&font(style.body_font_pt));
    s.push('\n');
    if style.striped {
        s.push_str("\\rowcolors{2}{white}{stripefill}\n");
    }
    s.push_str("\\begin{longtable}{|p{0.35\\linewidth}|p{0.55\\linewidth}|}\n\\hline\n");
    s.push_str(&format!(
        "\\rowcolor{{headerfill}}\\textbf{{{}}} & \\textbf{{{}}} \\\\\n\\hline\n",
        TABLE_HEADER[0], TABLE_HEADER[1]
    ));

    for row in page.rows {
        s.push_str(&escape_latex(&row.key));
        s.push_str(" & ");
        s.push_str(&escape_latex(&row.value));
        s.push_str(" \\\\\n\\hline\n");
    }

    s.push_str("\\end{longtable}\n}\n");
    s
}

/// What [`LatexExporter`] writes to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatexOutput {
    /// The `.tex` source.
    Source,
    /// A PDF compiled with one of [`ENGINES`].
    Pdf,
}

/// Exports a report as LaTeX source or as a compiled PDF.
#[derive(Debug, Clone)]
pub struct LatexExporter {
    output: LatexOutput,
    style: DocumentStyle,
    program: Option<String>,
}

impl LatexExporter {
    /// Write the LaTeX source only. Needs no external tools.
    pub fn source() -> Self {
        Self {
            output: LatexOutput::Source,
            style: DocumentStyle::default(),
            program: None,
        }
    }

    /// Compile to PDF with the first of [`ENGINES`] found on the `PATH`.
    /// Fails with [`ExportError::ToolNotFound`] if none is installed.
    pub fn pdf() -> Self {
        Self {
            output: LatexOutput::Pdf,
            ..Self::source()
        }
    }

    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }

    /// Always use this compiler instead of searching [`ENGINES`].
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn output(&self) -> LatexOutput {
        self.output
    }

    fn resolve_program(&self) -> Result<PathBuf, ExportError> {
        match &self.program {
            Some(program) => {
                which::which(program).map_err(|_| ExportError::ToolNotFound(program.clone()))
            }
            None => ENGINES
                .iter()
                .find_map(|engine| which::which(engine).ok())
                .ok_or_else(|| ExportError::ToolNotFound(ENGINES.join(", "))),
        }
    }

    fn compile(&self, source: &str) -> Result<Vec<u8>, ExportError> {
        let program = self.resolve_program()?;

        let workdir = tempfile::tempdir()?;
        let tex = workdir.path().join("report.tex");
        fs::write(&tex, source)?;

        debug!(program = %program.display(), "compiling report");
        let output = Command::new(&program)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg("report.tex")
            .current_dir(workdir.path())
            .output()?;

        if !output.status.success() {
            let log = String::from_utf8_lossy(&output.stdout);
            let detail = log
                .lines()
                .find(|line| line.starts_with('!'))
                .unwrap_or("no error message");
            return Err(ExportError::render(format!(
                "{} exited with {}: {}",
                program.display(),
                output.status,
                detail
            )));
        }

        Ok(fs::read(workdir.path().join("report.pdf"))?)
    }
}

impl Default for LatexExporter {
    fn default() -> Self {
        Self::pdf()
    }
}

impl DocumentExporter for LatexExporter {
    fn export(&self, sections: &[ReportSection], destination: &Path) -> Result<(), ExportError> {
        let source = to_latex(sections, &self.style);

        let bytes = match self.output {
            LatexOutput::Source => source.into_bytes(),
            LatexOutput::Pdf => self.compile(&source)?,
        };

        write_atomically(destination, &bytes)?;
        info!(destination = %destination.display(), output = ?self.output, "LaTeX export finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_sizer::{Answers, PromptKey, Report};
    use tempfile::TempDir;

    fn sections() -> Vec<ReportSection> {
        let answers = PromptKey::ALL
            .iter()
            .fold(Answers::new(), |answers, key| answers.with(*key, "50"))
            .with(PromptKey::Model, "LLAMA3 8B");
        Report::from_answers(&answers).unwrap().into_sections()
    }

    #[test]
    fn escapes_special_characters() {
        assert_eq!(escape_latex("50% & more"), "50\\% \\& more");
        assert_eq!(escape_latex("a_b#c"), "a\\_b\\#c");
        assert_eq!(escape_latex("{x}"), "\\{x\\}");
        assert_eq!(escape_latex("\\"), "\\textbackslash{}");
        assert_eq!(escape_latex("~^"), "\\textasciitilde{}\\textasciicircum{}");
    }

    #[test]
    fn one_page_per_section() {
        let latex = to_latex(&sections(), &DocumentStyle::default());

        assert!(latex.starts_with("\\documentclass{article}"));
        assert!(latex.ends_with("\\end{document}\n"));
        assert_eq!(latex.matches("\\begin{longtable}").count(), 5);
        assert_eq!(latex.matches("\\newpage").count(), 4);

        let overview = latex.find("\\textbf{Project Overview}").unwrap();
        let network = latex.find("\\textbf{Network}").unwrap();
        assert!(overview < network);
    }

    #[test]
    fn table_has_header_and_answers() {
        let latex = to_latex(&sections(), &DocumentStyle::default());

        assert!(latex.contains("\\rowcolor{headerfill}\\textbf{Key} & \\textbf{Value}"));
        assert!(latex.contains("Model Size & LLAMA3 8B \\\\"));
        assert!(latex.contains("Concurrent Users & 50 \\\\"));
        assert!(latex.contains("Recommended Bandwidth & 10 Gbps \\\\"));
    }

    #[test]
    fn non_latin_text_reaches_a_unicode_engine() {
        let answers = PromptKey::ALL
            .iter()
            .fold(Answers::new(), |answers, key| answers.with(*key, "５０"))
            .with(PromptKey::Model, "日本語モデル 🚀");
        let sections = Report::from_answers(&answers).unwrap().into_sections();

        let latex = to_latex(&sections, &DocumentStyle::default());

        assert!(latex.contains("Model Size & 日本語モデル 🚀 \\\\"));
        assert!(latex.contains("Concurrent Users & ５０ \\\\"));

        let engine_switch = latex.find("\\ifPDFTeX").unwrap();
        let fontspec = latex.find("\\usepackage{fontspec}").unwrap();
        let inputenc = latex.find("\\usepackage[utf8]{inputenc}").unwrap();
        assert!(engine_switch < inputenc && inputenc < fontspec);
        assert!(latex.contains("\\usepackage{xeCJK}"));
    }

    #[test]
    fn unicode_engines_are_preferred() {
        assert_eq!(ENGINES[0], "xelatex");
        assert_eq!(ENGINES.last(), Some(&"pdflatex"));
        assert_eq!(LatexExporter::default().output(), LatexOutput::Pdf);
    }

    #[test]
    fn style_drives_fonts_and_fills() {
        let latex = to_latex(&sections(), &DocumentStyle::default());
        assert!(latex.contains("\\fontsize{12.0pt}{14.4pt}"));
        assert!(latex.contains("\\fontsize{10.0pt}"));
        assert!(latex.contains("\\definecolor{headerfill}{RGB}{240,240,240}"));
        assert!(latex.contains("\\definecolor{stripefill}{RGB}{245,245,245}"));
        assert!(latex.contains("\\rowcolors{2}{white}{stripefill}"));

        let plain = DocumentStyle {
            striped: false,
            ..DocumentStyle::default()
        };
        assert!(!to_latex(&sections(), &plain).contains("\\rowcolors"));
    }

    #[test]
    fn source_export_writes_tex() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Infra_Sizer_Report.tex");

        LatexExporter::source().export(&sections(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\\textbf{Infra Sizing - Compute}"));
    }

    #[test]
    fn missing_compiler_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Infra_Sizer_Report.pdf");
        let exporter = LatexExporter::pdf().with_program("definitely-not-a-latex-compiler");

        let err = exporter.export(&sections(), &path).unwrap_err();

        assert!(err.is_unavailable());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn failing_compiler_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Infra_Sizer_Report.pdf");
        let exporter = LatexExporter::pdf().with_program("false");

        let err = exporter.export(&sections(), &path).unwrap_err();

        assert!(matches!(err, ExportError::RenderFailed(_)));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
