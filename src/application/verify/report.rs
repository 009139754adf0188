//! Verification report types
//!
//! Failures are report data, not errors: every widget is checked and every
//! problem is collected before anything is rendered.

use std::fmt;
use std::path::PathBuf;

/// A required check that did not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationFailure {
    /// `<name>.html` is absent
    MissingHtml { file: String },
    /// No `<name>.js` or `<name>-<hex>.js`
    MissingJs,
    /// The shell's `<script src>` points at a file that is not there
    BrokenJsReference { file: String },
    /// The shell's stylesheet `href` points at a file that is not there
    BrokenCssReference { file: String },
}

impl VerificationFailure {
    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHtml { .. } => "missing_html",
            Self::MissingJs => "missing_js",
            Self::BrokenJsReference { .. } => "broken_js_reference",
            Self::BrokenCssReference { .. } => "broken_css_reference",
        }
    }
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHtml { file } => write!(f, "HTML {} not found", file),
            Self::MissingJs => f.write_str("no JS file found"),
            Self::BrokenJsReference { file } => {
                write!(f, "JS {} referenced but not found", file)
            }
            Self::BrokenCssReference { file } => {
                write!(f, "CSS {} referenced but not found", file)
            }
        }
    }
}

/// A non-fatal finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationWarning {
    /// The widget has no stylesheet
    NoCss,
}

impl VerificationWarning {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoCss => "no_css",
        }
    }
}

impl fmt::Display for VerificationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCss => f.write_str("no CSS"),
        }
    }
}

/// Outcome for one expected widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetReport {
    pub name: String,
    /// JS files found for this widget
    pub js_files: Vec<String>,
    /// CSS files found for this widget
    pub css_files: Vec<String>,
    pub failures: Vec<VerificationFailure>,
    pub warnings: Vec<VerificationWarning>,
}

impl WidgetReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            js_files: Vec::new(),
            css_files: Vec::new(),
            failures: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of a verification pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub out_dir: PathBuf,
    pub widgets: Vec<WidgetReport>,
}

impl VerificationReport {
    /// No widget failed a required check
    pub fn is_success(&self) -> bool {
        self.widgets.iter().all(WidgetReport::passed)
    }

    /// No failures and no warnings
    pub fn is_clean(&self) -> bool {
        self.is_success() && self.warning_count() == 0
    }

    pub fn passed_count(&self) -> usize {
        self.widgets.iter().filter(|w| w.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.widgets.len() - self.passed_count()
    }

    pub fn warning_count(&self) -> usize {
        self.widgets.iter().map(|w| w.warnings.len()).sum()
    }

    pub fn widget(&self, name: &str) -> Option<&WidgetReport> {
        self.widgets.iter().find(|w| w.name == name)
    }
}
