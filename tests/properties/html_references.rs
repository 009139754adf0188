//! Property tests for HTML reference extraction.

use proptest::prelude::*;

use widgetpack::domain::services::{extract_references, ReferenceKind};

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9\\-]{0,12}-[0-9a-f]{4,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Extraction never panics on arbitrary input.
    #[test]
    fn property_extract_never_panics(html in "(?s).{0,512}") {
        let _ = extract_references(&html);
    }

    /// PROPERTY: Attribute order and quoting do not affect extraction.
    #[test]
    fn property_attribute_order_is_irrelevant(
        name in file_name(),
        single_quotes in any::<bool>(),
        src_first in any::<bool>(),
    ) {
        let q = if single_quotes { '\'' } else { '"' };
        let src = format!("src={q}/assets/{name}.js{q}");
        let ty = format!("type={q}module{q}");
        let attrs = if src_first { format!("{src} {ty}") } else { format!("{ty} {src}") };
        let html = format!("<html><head><script {attrs}></script></head></html>");

        let refs = extract_references(&html);

        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(refs[0].kind, ReferenceKind::Script);
        let expected = format!("{}.js", name);
        prop_assert_eq!(refs[0].file_name(), expected.as_str());
    }

    /// PROPERTY: Commented-out tags are never reported.
    #[test]
    fn property_comments_are_skipped(name in file_name()) {
        let html = format!(
            "<!-- <script src=\"/{name}.js\"></script> --><link rel=\"stylesheet\" href=\"/{name}.css\">"
        );

        let refs = extract_references(&html);

        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(refs[0].kind, ReferenceKind::Stylesheet);
    }
}
