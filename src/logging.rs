//! Tracing bootstrap
//!
//! `RUST_LOG` is honored; the app's own targets always log at info.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &[&str] = &["orgchart_desktop_lib=info", "orgchart_export=info"];

fn env_filter() -> EnvFilter {
    DEFAULT_DIRECTIVES
        .iter()
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(EnvFilter::from_default_env(), |filter, directive| filter.add_directive(directive))
}

/// Install the global fmt subscriber.
///
/// Returns false when a global subscriber was already set; nothing changes then.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok()
}
