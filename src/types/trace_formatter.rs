//! Cause chain rendering.
//!
//! A chain renders as a list of labels: the error payload of a failure, if
//! any, then one `[severity] text` label per trace entry, outermost first.
//! [`TraceFormatBuilder`] (returned by `fmt()` on traces, failures and unwrap
//! errors) builds the labels and hands them to a [`TraceFormatter`].

use core::fmt::{self, Display};

use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::MessageTrace;

/// Turns the labels of a chain into one string.
///
/// Implement this to plug a custom layout into
/// [`TraceFormatBuilder::render_with`]. The default joins labels with
/// [`separator`](TraceFormatter::separator).
pub trait TraceFormatter {
    fn separator(&self) -> &str {
        " -> "
    }

    fn render(&self, labels: &[String]) -> String {
        labels.join(self.separator())
    }
}

/// Layout used by [`TraceFormatBuilder`]'s `Display` impl.
///
/// With `cascade` set, each label after the first starts on a new line
/// indented by one more `indent` than the label before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFormatConfig {
    pub separator: String,
    pub indent: String,
    pub show_severity: bool,
    pub cascade: bool,
}

impl Default for TraceFormatConfig {
    fn default() -> Self {
        Self { separator: " -> ".into(), indent: "  ".into(), show_severity: true, cascade: false }
    }
}

impl TraceFormatConfig {
    /// The `{:#}` layout.
    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_severity() -> Self {
        Self { show_severity: false, ..Default::default() }
    }
}

impl TraceFormatter for TraceFormatConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn render(&self, labels: &[String]) -> String {
        if !self.cascade {
            return labels.join(self.separator.as_str());
        }
        let mut out = String::new();
        for (level, label) in labels.iter().enumerate() {
            if level > 0 {
                out.push_str(&self.separator);
                out.push_str(&self.indent.repeat(level));
            }
            out.push_str(label);
        }
        out
    }
}

/// Builder for customizing chain display output.
pub struct TraceFormatBuilder<'a> {
    pub(crate) head: Option<&'a dyn Display>,
    pub(crate) trace: Option<&'a MessageTrace>,
    pub(crate) config: TraceFormatConfig,
    pub(crate) root_first: bool,
}

impl<'a> TraceFormatBuilder<'a> {
    /// Renders `trace` and its causes.
    pub fn new(trace: &'a MessageTrace) -> Self {
        Self { head: None, trace: Some(trace), config: TraceFormatConfig::default(), root_first: false }
    }

    /// Renders `head` followed by `trace` and its causes.
    pub fn headed(head: &'a dyn Display, trace: Option<&'a MessageTrace>) -> Self {
        Self { head: Some(head), trace, config: TraceFormatConfig::default(), root_first: false }
    }

    pub fn with_config(mut self, config: TraceFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Lists trace entries root cause first. The head, if any, stays first.
    pub fn root_first(mut self, enabled: bool) -> Self {
        self.root_first = enabled;
        self
    }

    pub fn show_severity(mut self, show: bool) -> Self {
        self.config.show_severity = show;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = TraceFormatConfig::compact();
        self
    }

    /// Switches to the cascaded layout, keeping any custom separator.
    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled && self.config.separator == " -> " {
            self.config.separator = "\n".into();
        }
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = TraceFormatConfig::cascaded();
        self
    }

    /// The labels this builder would render, head first.
    pub fn labels(&self) -> Vec<String> {
        let mut entries: Vec<String> = match self.trace {
            Some(trace) => trace.iter().map(|entry| self.entry_label(entry)).collect(),
            None => Vec::new(),
        };
        if self.root_first {
            entries.reverse();
        }
        match self.head {
            Some(head) => core::iter::once(head.to_string()).chain(entries).collect(),
            None => entries,
        }
    }

    /// Renders the labels with `formatter` instead of the builder's config.
    pub fn render_with<F: TraceFormatter + ?Sized>(&self, formatter: &F) -> String {
        formatter.render(&self.labels())
    }

    fn entry_label(&self, entry: &MessageTrace) -> String {
        if self.config.show_severity {
            alloc::format!("[{}] {}", entry.severity().as_str(), entry.text())
        } else {
            entry.text().to_string()
        }
    }
}

impl Display for TraceFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.render(&self.labels()))
    }
}
