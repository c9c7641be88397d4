use tracing_subscriber::EnvFilter;

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "amlich",
    "amlich_calendar",
    "amlich_ephem",
    "amlich_rs",
    "amlich_time",
    "amlich_vn",
];

/// Filter directive for a CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_is_warn() {
        let f = default_filter(0);
        assert!(f.starts_with("amlich=warn,"));
        assert!(f.contains("amlich_calendar=warn"));
    }

    #[test]
    fn levels_saturate_at_trace() {
        assert!(default_filter(2).contains("amlich_vn=debug"));
        assert!(default_filter(7).contains("amlich_time=trace"));
    }
}
