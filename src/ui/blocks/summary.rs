use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Partial,
    Failure,
}

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    outcome: Outcome,
    stats: Vec<(String, usize)>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            title: title.into(),
            outcome,
            stats: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Success)
    }

    /// Succeeded, but with warnings worth reading
    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Partial)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::new(title, Outcome::Failure)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = self.title.as_str();
        let (icon, title) = match self.outcome {
            Outcome::Success => (Icon::Success, ColoredText::success(title).bold()),
            Outcome::Partial => (Icon::Warning, ColoredText::warning(title).bold()),
            Outcome::Failure => (Icon::Error, ColoredText::error(title).bold()),
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );

        if !self.stats.is_empty() {
            let stats: Vec<String> = self
                .stats
                .iter()
                .map(|(label, count)| format!("{} {}", count, label))
                .collect();
            out.push_str(&format!("  {}\n", stats.join(", ")));
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}
