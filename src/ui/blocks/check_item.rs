use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// One line per widget, with indented detail lines
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub details: Vec<String>,
}

impl CheckItem {
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = match self.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
        }
        .colored(supports_color, supports_unicode);

        let mut out = String::new();
        if self.message.is_empty() {
            out.push_str(&format!("  {} {}\n", icon, self.name));
        } else {
            out.push_str(&format!("  {} {} - {}\n", icon, self.name, self.message));
        }

        for detail in &self.details {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                detail
            ));
        }

        out
    }
}
