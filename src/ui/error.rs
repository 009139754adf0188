use widgetpack::WidgetpackError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = match err.downcast_ref::<WidgetpackError>() {
        Some(e) => match e.widget() {
            Some(widget) => format!(
                "{} {} {}\n",
                icon,
                ColoredText::error(format!("[{}]", widget)).render(supports_color),
                e
            ),
            None => format!("{} {}\n", icon, e),
        },
        None => format!("{} {}\n", icon, err),
    };

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }
    out
}
