//! Bundler adapters
//!
//! Concrete implementations of the WidgetBundler port.

mod esbuild;
mod passthrough;

pub use esbuild::EsbuildBundler;
pub use passthrough::PassthroughBundler;

use crate::config::{BundlerConfig, BundlerKind};
use crate::domain::ports::WidgetBundler;

/// Build the bundler selected by configuration
pub fn bundler_for(config: &BundlerConfig) -> Box<dyn WidgetBundler> {
    match config.kind {
        BundlerKind::Esbuild => Box::new(EsbuildBundler::new(
            config.program.clone(),
            config.args.clone(),
        )),
        BundlerKind::Passthrough => Box::new(PassthroughBundler::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundler_for_selects_by_kind() {
        let mut config = BundlerConfig::default();
        assert_eq!(bundler_for(&config).id(), "esbuild");

        config.kind = BundlerKind::Passthrough;
        assert_eq!(bundler_for(&config).id(), "passthrough");
    }
}
