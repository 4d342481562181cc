use tracing_subscriber::filter::LevelFilter;

pub fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

/// Installs the global terminal logger.
pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG", LevelFilter::WARN), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("warn", LevelFilter::INFO), LevelFilter::WARN);
        assert_eq!(parse_log_level("loud", LevelFilter::INFO), LevelFilter::INFO);
    }
}
