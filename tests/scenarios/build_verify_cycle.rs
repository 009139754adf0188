//! Scenario: Build, break, rebuild
//!
//! Journey: a developer builds the widget set, a deploy step loses one
//! asset, verify catches it, and a clean rebuild restores a consistent
//! output directory.

use crate::common::*;
use crate::{assert_asset, assert_no_asset, assert_success};
use widgetpack::{hash, HashLength};

#[test]
fn scenario_build_break_rebuild() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None)
        .widget("scoreboard", SCOREBOARD_JS, Some(SCOREBOARD_CSS));

    // Step 1: build and verify
    assert_success!(env.run(&["build"]));
    assert_success!(env.run(&["verify"]));

    // Step 2: lose the stylesheet
    let css = format!(
        "scoreboard-{}.css",
        hash(SCOREBOARD_CSS.as_bytes(), HashLength::DEFAULT)
    );
    std::fs::remove_file(env.asset_path(&css)).unwrap();
    let result = env.run(&["verify"]);
    assert!(!result.success);
    assert!(
        result
            .stdout
            .contains(&format!("CSS {} referenced but not found", css)),
        "stdout: {}",
        result.stdout
    );

    // Step 3: rebuild restores everything
    assert_success!(env.run(&["build"]));
    assert_asset!(env, &css);
    assert_success!(env.run(&["verify"]));
}

#[test]
fn scenario_builds_are_byte_identical() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None)
        .widget("scoreboard", SCOREBOARD_JS, Some(SCOREBOARD_CSS));

    assert_success!(env.run(&["build"]));
    let first_files = env.asset_files();
    let first_manifest = env.read_asset("manifest.json");
    let first_html = env.read_asset("scoreboard.html");

    assert_success!(env.run(&["build"]));

    assert_eq!(first_files, env.asset_files());
    assert_eq!(first_manifest, env.read_asset("manifest.json"));
    assert_eq!(first_html, env.read_asset("scoreboard.html"));
}

#[test]
fn scenario_editing_one_widget_rehashes_only_it() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None)
        .widget("scoreboard", SCOREBOARD_JS, Some(SCOREBOARD_CSS));
    assert_success!(env.run(&["build"]));
    let before = env.manifest();
    let scoreboard_html = env.read_asset("scoreboard.html");

    env.widget("example", "export function mount() {}\n", None);
    assert_success!(env.run(&["build"]));
    let after = env.manifest();

    assert_ne!(before["example"], after["example"]);
    assert_eq!(before["scoreboard"], after["scoreboard"]);
    assert_eq!(scoreboard_html, env.read_asset("scoreboard.html"));
    let old_js = format!("example-{}.js", before["example"].as_str().unwrap());
    let new_js = format!("example-{}.js", after["example"].as_str().unwrap());
    assert_no_asset!(env, &old_js);
    assert_asset!(env, &new_js);
    let example_html = env.read_asset("example.html");
    assert!(
        example_html.contains(&format!("src=\"https://cdn.example.com/{}\"", new_js)),
        "example.html: {}",
        example_html
    );
    assert!(!example_html.contains(&old_js));
}
