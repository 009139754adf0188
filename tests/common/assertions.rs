//! Assertion macros with descriptive failure messages.

/// Assert that a file exists in the output directory.
#[macro_export]
macro_rules! assert_asset {
    ($env:expr, $file:expr) => {
        assert!(
            $env.asset_path($file).exists(),
            "Expected asset '{}', but it doesn't exist.\nAssets found:\n  {}",
            $file,
            $env.asset_files().join("\n  ")
        );
    };
}

/// Assert that a file does NOT exist in the output directory.
#[macro_export]
macro_rules! assert_no_asset {
    ($env:expr, $file:expr) => {
        assert!(
            !$env.asset_path($file).exists(),
            "Expected asset '{}' to NOT exist.\nAssets found:\n  {}",
            $file,
            $env.asset_files().join("\n  ")
        );
    };
}

/// Assert that stdout or stderr contains a pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\nstdout:\n{}\nstderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Command failed with exit code {}\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
