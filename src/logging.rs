//! Tracing subscriber set-up shared by the three binaries.
//!
//! Output goes to stderr so it never mixes with the CLI's own messages.

use tracing_subscriber::EnvFilter;

/// Maps the level names `tracing` does not know (`warning`, `critical`,
/// `fatal`) onto the nearest ones, in bare and `target=level` directives.
pub fn normalize_directive(directive: &str) -> String {
    directive
        .split(',')
        .map(|part| {
            let part = part.trim().to_ascii_lowercase();
            match part.rsplit_once('=') {
                Some((target, level)) => format!("{}={}", target, level_name(level)),
                None => level_name(&part).to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn level_name(level: &str) -> &str {
    match level {
        "warning" => "warn",
        "critical" | "fatal" => "error",
        other => other,
    }
}

/// Builds the filter from a `LOG_LEVEL` directive.
///
/// Falls back to `RUST_LOG` and then to `info` when the directive is empty
/// or unparsable.
pub fn env_filter(directive: &str) -> EnvFilter {
    let directive = directive.trim();
    if !directive.is_empty() {
        if let Ok(filter) = EnvFilter::try_new(normalize_directive(directive)) {
            return filter;
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global fmt subscriber. Safe to call more than once.
pub fn init(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(std::io::stderr)
        .try_init();
}
