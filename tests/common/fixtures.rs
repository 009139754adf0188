//! Test fixtures - reusable widget sources and configs.

#![allow(dead_code)]

/// Project config using the passthrough bundler and plain `.js` entries
pub const PASSTHROUGH_CONFIG: &str = r#"[build]
entry_glob = "**/index.js"
base_url = "https://cdn.example.com/"

[bundler]
kind = "passthrough"

[verify]
widgets = ["example", "scoreboard"]
"#;

/// Widget without styles
pub const EXAMPLE_JS: &str = "export function mount(root) { root.textContent = 'example'; }\n";

/// Widget with styles
pub const SCOREBOARD_JS: &str = "export function mount(root) { root.innerHTML = '<table></table>'; }\n";
pub const SCOREBOARD_CSS: &str = "table { border-collapse: collapse; }\n";

/// Entry that acts as its own bundler when run through `sh`: writes the
/// `--outfile` it is handed
pub const SH_BUNDLE_OK: &str = r#"for arg in "$@"; do
  case "$arg" in
    --outfile=*) printf 'export default 1;' > "${arg#--outfile=}" ;;
  esac
done
"#;

/// Entry that fails like a bundler syntax error when run through `sh`
pub const SH_BUNDLE_FAIL: &str = "echo 'ERROR: Expected \";\" but found \"}\"' >&2\nexit 1\n";

/// Project config that runs each entry file through `sh` as the bundler
pub const SH_BUNDLER_CONFIG: &str = r#"[build]
entry_glob = "**/index.sh"

[bundler]
kind = "esbuild"
program = "sh"
"#;
