mod catalog;
mod glitch;
mod invariants;
mod printer;

#[cfg(test)]
mod tests;

pub use catalog::{
    CATALOG, CatalogError, DiagnosticInfo, DiagnosticKind, Severity, format_message, lookup,
    lookup_by_reference_code, validate_catalog,
};
pub use glitch::{Glitch, GlitchLocus, GlitchResult};
pub use printer::DiagnosticsPrinter;

/// Ordered sink of glitches reported during a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    glitches: Vec<Glitch>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    glitch: Glitch,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            glitches: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and locus.
    ///
    /// Uses the kind's catalog description. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, locus: GlitchLocus) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            glitch: Glitch::new(GlitchResult::new(kind), locus),
        }
    }

    pub fn push(&mut self, glitch: Glitch) {
        self.glitches.push(glitch);
    }

    pub fn is_empty(&self) -> bool {
        self.glitches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.glitches.len()
    }

    pub fn has_errors(&self) -> bool {
        self.glitches.iter().any(Glitch::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.glitches.iter().any(Glitch::is_warning)
    }

    pub fn error_count(&self) -> usize {
        self.glitches.iter().filter(|g| g.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.glitches.iter().filter(|g| g.is_warning()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glitch> {
        self.glitches.iter()
    }

    /// Kinds in report order, handy for assertions.
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.glitches.iter().map(Glitch::kind).collect()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.glitches.extend(other.glitches);
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_with_source(&self, source: &str) -> String {
        self.printer().source(source).render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Glitch;
    type IntoIter = std::slice::Iter<'a, Glitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.glitches.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Replace the catalog description with a specific message.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.glitch.result.message = msg.into();
        self
    }

    pub fn emit(self) {
        log::trace!(
            "diagnostic {:?} at {}: {}",
            self.glitch.kind(),
            self.glitch.locus.range,
            self.glitch.message()
        );
        self.diagnostics.glitches.push(self.glitch);
    }
}
