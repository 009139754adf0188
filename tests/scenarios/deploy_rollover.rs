//! Scenario: Serving layer rollover
//!
//! Journey: a host serves widget shells through `widgetpack resolve` while
//! switching between hashed and unhashed builds.

use crate::common::*;
use crate::assert_success;

#[test]
fn scenario_resolve_tracks_current_build() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    // Step 1: hashed build, live shell is served
    assert_success!(env.run(&["build"]));
    let served = env.run(&["resolve", "example", "--print"]);
    assert_success!(served);
    assert!(served.stdout.contains("/example-"));

    // Step 2: unhashed build replaces the hashed shells
    assert_success!(env.run(&["build", "--no-hash"]));
    let served = env.run(&["resolve", "example", "--print"]);
    assert_success!(served);
    assert!(served
        .stdout
        .contains("src=\"https://cdn.example.com/example.js\""));
    assert!(!env
        .asset_files()
        .iter()
        .any(|f| f.starts_with("example-")));
}

#[test]
fn scenario_custom_output_dir_round_trip() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    assert_success!(env.run(&["build", "--out-dir", "public/widgets"]));
    assert!(env.project_path("public/widgets/manifest.json").exists());

    let verify = env.run(&["verify", "--out-dir", "public/widgets", "--widget", "example"]);
    assert_success!(verify);

    let resolve = env.run(&["resolve", "example", "--out-dir", "public/widgets"]);
    assert_success!(resolve);
    assert!(resolve.stdout.contains("widgets"));
}
