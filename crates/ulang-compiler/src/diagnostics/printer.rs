//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use ulang_core::TextRange;

use super::{Diagnostics, Severity};

/// Renders glitches either as one-line tool output or, when the source text
/// is known, as annotated snippets.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// Override the path shown in snippet headers. Defaults to each glitch's snippet path.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, glitch) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let Some(span) = byte_span(glitch.locus.range, source) else {
                writeln!(w, "{}", glitch.as_formatted_string())?;
                continue;
            };

            let mut snippet = Snippet::source(source).line_start(1).annotation(
                AnnotationKind::Primary
                    .span(span)
                    .label(glitch.message()),
            );

            let path = self.path.unwrap_or(glitch.locus.snippet_path.as_str());
            if !path.is_empty() {
                snippet = snippet.path(path);
            }

            let title = format!("[{}] {}", glitch.kind().code(), glitch.message());
            let level = severity_to_level(glitch.severity());
            let report: Vec<Group> = vec![level.primary_title(&title).element(snippet)];

            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for glitch in self.diagnostics {
            writeln!(w, "{glitch}")?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
        Severity::Info => Level::INFO,
        Severity::Ok => Level::NOTE,
    }
}

/// Byte span of `range` in `source`, widened to one byte when empty.
fn byte_span(range: TextRange, source: &str) -> Option<std::ops::Range<usize>> {
    if !range.is_valid() {
        return None;
    }
    let start = range.begin.byte_offset(source)?;
    let end = range.end.byte_offset(source)?;

    if start == end {
        return Some(start..(start + 1).min(source.len()));
    }

    Some(start..end)
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
