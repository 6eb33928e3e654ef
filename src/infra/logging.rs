pub fn init() {
    // Initialize tracing subscriber once, honoring RUST_LOG if set.
    // Logs go to stderr: stdout carries the protocol in stdio mode.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log a metric line and forward it to the `metrics` facade.
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
    if metric.ends_with("_total") {
        metrics::counter!(metric.to_owned(), "tool" => tool.to_owned()).increment(value as u64);
    } else {
        metrics::histogram!(metric.to_owned(), "tool" => tool.to_owned()).record(value);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }

    #[test]
    fn log_metric_without_recorder_is_a_noop() {
        super::log_metric("chapters.all", "remote_latency_ms", 12.0);
        super::log_metric("chapters.all", "remote_error_total", 1.0);
    }
}
