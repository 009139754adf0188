//! Asset naming convention
//!
//! Every file the pipeline writes is named from the widget name alone:
//!
//! | file            | unhashed       | hashed                |
//! |-----------------|----------------|-----------------------|
//! | script          | `<name>.js`    | `<name>-<hash>.js`    |
//! | stylesheet      | `<name>.css`   | `<name>-<hash>.css`   |
//! | HTML shell      | `<name>.html`  | `<name>-<hash>.html`  |

use crate::domain::value_objects::ContentHash;

pub const JS_EXT: &str = "js";
pub const CSS_EXT: &str = "css";
pub const HTML_EXT: &str = "html";

/// File name of the manifest inside the output directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// `<name>.<ext>`
pub fn plain_file_name(name: &str, ext: &str) -> String {
    format!("{}.{}", name, ext)
}

/// `<name>-<hash>.<ext>`
pub fn hashed_file_name(name: &str, hash: &ContentHash, ext: &str) -> String {
    format!("{}-{}.{}", name, hash, ext)
}

/// Whether `file_name` is a `<name>.<ext>` or `<name>-<hex>.<ext>` asset of `widget`
pub fn matches_asset(file_name: &str, widget: &str, ext: &str) -> bool {
    let Some(stem) = file_name
        .strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))
    else {
        return false;
    };
    let Some(rest) = stem.strip_prefix(widget) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    match rest.strip_prefix('-') {
        Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
