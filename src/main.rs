//! Runs the reference tournament and prints the final hit points.
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when set and valid, `warn` otherwise.
fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let report = joust::run(&joust::reference_roster())?;
    println!("{}", report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_filter_defaults_to_warn() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_global_level_is_honoured() {
        let filter = env_filter(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
