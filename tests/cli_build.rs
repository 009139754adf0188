//! CLI tests for `widgetpack build`

mod common;

use common::*;
use widgetpack::{hash, HashLength};

fn js_hash(content: &str) -> String {
    hash(content.as_bytes(), HashLength::DEFAULT)
}

#[test]
fn build_writes_hashed_assets_and_manifest() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None)
        .widget("scoreboard", SCOREBOARD_JS, Some(SCOREBOARD_CSS));

    let result = env.run(&["build"]);

    assert_success!(result);
    let example = js_hash(EXAMPLE_JS);
    let scoreboard = js_hash(SCOREBOARD_JS);
    let scoreboard_css = js_hash(SCOREBOARD_CSS);
    assert_asset!(env, &format!("example-{}.js", example));
    assert_asset!(env, &format!("example-{}.html", example));
    assert_asset!(env, "example.html");
    assert_asset!(env, &format!("scoreboard-{}.css", scoreboard_css));
    assert_no_asset!(env, "example.js");

    let manifest = env.manifest();
    assert_eq!(manifest["example"], example.as_str());
    assert_eq!(manifest["scoreboard"], scoreboard.as_str());
    assert_output_contains!(result, "Build complete");
}

#[test]
fn html_shells_use_normalized_base_url() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None)
        .widget("scoreboard", SCOREBOARD_JS, Some(SCOREBOARD_CSS));

    assert_success!(env.run(&["build"]));

    let example = env.read_asset("example.html");
    assert!(example.contains(&format!(
        "src=\"https://cdn.example.com/example-{}.js\"",
        js_hash(EXAMPLE_JS)
    )));
    assert!(!example.contains("<link"));
    let scoreboard = env.read_asset("scoreboard.html");
    assert!(scoreboard.contains(&format!(
        "href=\"https://cdn.example.com/scoreboard-{}.css\"",
        js_hash(SCOREBOARD_CSS)
    )));
}

#[test]
fn no_hash_flag_keeps_plain_names() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, Some("p{}"));

    let result = env.run(&["build", "--no-hash"]);

    assert_success!(result);
    assert_eq!(
        env.asset_files(),
        vec!["example.css", "example.html", "example.js", "manifest.json"]
    );
    assert_eq!(env.manifest()["example"], "example");
}

#[test]
fn hash_length_flag_shortens_names() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    assert_success!(env.run(&["build", "--hash-length", "4"]));

    let short = hash(EXAMPLE_JS.as_bytes(), HashLength::SHORT);
    assert_asset!(env, &format!("example-{}.js", short));
    assert_eq!(env.manifest()["example"], short.as_str());
}

#[test]
fn out_of_range_hash_length_fails() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    let result = env.run(&["build", "--hash-length", "65"]);

    assert!(!result.success);
    assert_output_contains!(result, "invalid hash length 65");
}

#[test]
fn env_base_url_is_overridden_by_flag() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    let result = env.run_with_env(
        &["build", "--base-url", "https://flag.example.com/"],
        &[("WIDGETPACK_BASE_URL", "https://env.example.com")],
    );

    assert_success!(result);
    let html = env.read_asset("example.html");
    assert!(html.contains("https://flag.example.com/example-"));
    assert!(!html.contains("env.example.com"));
}

#[test]
fn generic_base_url_env_is_honoured() {
    let env = TestEnv::empty();
    env.write_project_file(
        "widgetpack.toml",
        "[build]\nentry_glob = \"**/index.js\"\n\n[bundler]\nkind = \"passthrough\"\n",
    );
    env.widget("example", EXAMPLE_JS, None);

    assert_success!(env.run_with_env(&["build"], &[("BASE_URL", "/static/")]));

    assert!(env.read_asset("example.html").contains("src=\"/static/example-"));
}

#[test]
fn stale_assets_are_removed() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);
    env.write_project_file("assets/example-deadbeef.js", "old");
    env.write_project_file("assets/retired.html", "old");

    assert_success!(env.run(&["build"]));

    assert_no_asset!(env, "example-deadbeef.js");
    assert_no_asset!(env, "retired.html");
}

#[test]
fn no_entries_fails() {
    let env = TestEnv::new();
    env.write_project_file("src/example/README.md", "nothing to build");

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_output_contains!(result, "no widget entry points");
}

#[test]
fn unknown_config_key_warns_without_failing() {
    let env = TestEnv::new();
    env.write_project_file(
        "widgetpack.toml",
        "[build]\nentry_glob = \"**/index.js\"\nout_dri = \"dist\"\n\n[bundler]\nkind = \"passthrough\"\n",
    );
    env.widget("example", EXAMPLE_JS, None);

    let result = env.run(&["build"]);

    assert_success!(result);
    assert!(result.stderr.contains("out_dri"), "stderr: {}", result.stderr);
}

#[test]
fn json_output_is_ndjson() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None)
        .widget("scoreboard", SCOREBOARD_JS, Some(SCOREBOARD_CSS));

    let result = env.run(&["--json", "build"]);

    assert_success!(result);
    let events = result.json_events();
    let names: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names.first(), Some(&"start"));
    assert_eq!(names.last(), Some(&"complete"));
    assert_eq!(names.iter().filter(|n| **n == "item_built").count(), 2);
    assert!(names.contains(&"manifest_written"));
    assert!(events.iter().all(|e| e["command"] == "build"));
}

#[test]
fn build_from_subdirectory_finds_project_root() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    let result = env.run_from(&env.project_path("src/example"), &["build"]);

    assert_success!(result);
    assert_asset!(env, "manifest.json");
}

#[cfg(unix)]
#[test]
fn failing_widget_aborts_without_manifest() {
    let env = TestEnv::empty();
    env.write_project_file("widgetpack.toml", SH_BUNDLER_CONFIG);
    env.write_project_file("src/a-first/index.sh", SH_BUNDLE_OK);
    env.write_project_file("src/b-broken/index.sh", SH_BUNDLE_FAIL);

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_ne!(result.exit_code, 0);
    assert_output_contains!(result, "[b-broken]");
    assert_output_contains!(result, "Expected \";\" but found");
    assert_no_asset!(env, "manifest.json");
}

#[cfg(unix)]
#[test]
fn external_bundler_outputs_are_hashed() {
    let env = TestEnv::empty();
    env.write_project_file("widgetpack.toml", SH_BUNDLER_CONFIG);
    env.write_project_file("src/example/index.sh", SH_BUNDLE_OK);

    assert_success!(env.run(&["build"]));

    assert_asset!(env, &format!("example-{}.js", js_hash("export default 1;")));
}

#[test]
fn missing_bundler_program_is_reported() {
    let env = TestEnv::empty();
    env.write_project_file(
        "widgetpack.toml",
        "[build]\nentry_glob = \"**/index.js\"\n\n[bundler]\nprogram = \"widgetpack-no-such-bundler\"\n",
    );
    env.widget("example", EXAMPLE_JS, None);

    let result = env.run(&["build"]);

    assert!(!result.success);
    assert_output_contains!(result, "failed to run widgetpack-no-such-bundler");
    assert_no_asset!(env, "manifest.json");
}

#[test]
fn out_dir_over_sources_is_refused() {
    let env = TestEnv::new();
    env.widget("example", EXAMPLE_JS, None);

    for out_dir in [".", "src"] {
        let result = env.run(&["build", "--out-dir", out_dir]);

        assert!(!result.success);
        assert_output_contains!(result, "refusing to clean it");
        assert!(env.project_path("src/example/index.js").is_file());
        assert!(env.project_path("widgetpack.toml").is_file());
    }
}
