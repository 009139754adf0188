//! HTML shell generation
//!
//! Pure function of the artifact and the base URL: the same inputs always
//! give byte-identical markup.

use crate::domain::entities::Artifact;
use crate::domain::value_objects::BaseUrl;

/// Render the HTML shell for `artifact`
///
/// The shell loads the widget script as a module, links its stylesheet
/// (only when one was produced) and exposes a single `<name>-root` mount
/// point for the host runtime.
pub fn generate(artifact: &Artifact, base_url: &BaseUrl) -> String {
    let mut html = String::with_capacity(256);
    html.push_str("<!doctype html>\n<html>\n<head>\n");
    html.push_str(&format!(
        "  <script type=\"module\" src=\"{}\"></script>\n",
        escape_attr(&base_url.join(&artifact.js_file_name()))
    ));
    if let Some(css) = artifact.css_file_name() {
        html.push_str(&format!(
            "  <link rel=\"stylesheet\" href=\"{}\">\n",
            escape_attr(&base_url.join(&css))
        ));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "  <div id=\"{}-root\"></div>\n",
        escape_attr(artifact.name())
    ));
    html.push_str("</body>\n</html>\n");
    html
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
