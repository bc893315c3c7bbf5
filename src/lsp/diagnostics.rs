//! `textDocument/publishDiagnostics` notification.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::Range;

/// Method name of the diagnostics notification.
pub const PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

/// Diagnostic severity, encoded as its LSP integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// 1
    Error,
    /// 2
    Warning,
    /// 3
    Information,
    /// 4
    Hint,
}

impl DiagnosticSeverity {
    /// The LSP integer code.
    pub fn code(self) -> u8 {
        match self {
            DiagnosticSeverity::Error => 1,
            DiagnosticSeverity::Warning => 2,
            DiagnosticSeverity::Information => 3,
            DiagnosticSeverity::Hint => 4,
        }
    }

    /// Parse an LSP integer code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DiagnosticSeverity::Error),
            2 => Some(DiagnosticSeverity::Warning),
            3 => Some(DiagnosticSeverity::Information),
            4 => Some(DiagnosticSeverity::Hint),
            _ => None,
        }
    }
}

impl Serialize for DiagnosticSeverity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for DiagnosticSeverity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        DiagnosticSeverity::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid severity {code}")))
    }
}

/// One diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Affected range.
    pub range: Range,
    /// Severity.
    pub severity: DiagnosticSeverity,
    /// Producer of the diagnostic.
    pub source: String,
    /// Message shown to the user.
    pub message: String,
}

/// Params of `textDocument/publishDiagnostics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    /// Document the diagnostics belong to.
    pub uri: String,
    /// Full set of diagnostics for the document.
    pub diagnostics: Vec<Diagnostic>,
}
