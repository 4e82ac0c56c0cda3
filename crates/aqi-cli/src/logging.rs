//! Tracing setup shared by the binaries.

use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: [&str; 2] = ["aqi_cli=info", "aqi_core=info"];

/// Install a stderr subscriber filtered by `RUST_LOG` (falling back to
/// `info` for the aqi crates) so stdout stays clean for JSON output.
///
/// Set `AQI_LOG_JSON=1` for structured JSON log lines.
pub fn init_tracing() -> anyhow::Result<()> {
    let rust_log_set = env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter = with_default_directives(EnvFilter::from_default_env(), rust_log_set)?;
    let json = env::var("AQI_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .try_init()?;
    Ok(())
}

/// An explicit `RUST_LOG` wins; otherwise the aqi crates log at `info`.
fn with_default_directives(filter: EnvFilter, rust_log_set: bool) -> anyhow::Result<EnvFilter> {
    if rust_log_set {
        return Ok(filter);
    }
    DEFAULT_DIRECTIVES
        .iter()
        .try_fold(filter, |filter, directive| {
            Ok(filter.add_directive(directive.parse()?))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_rust_log_gets_crate_defaults() {
        let filter = with_default_directives(EnvFilter::default(), false).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("aqi_cli=info"), "{rendered}");
        assert!(rendered.contains("aqi_core=info"), "{rendered}");
    }

    #[test]
    fn explicit_rust_log_is_left_alone() {
        let filter = with_default_directives(EnvFilter::new("aqi_core=debug"), true).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("aqi_core=debug"), "{rendered}");
        assert!(!rendered.contains("aqi_cli"), "{rendered}");
    }
}
