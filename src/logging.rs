use crate::error::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Start logging to stderr. `RUST_LOG` wins over `default_spec` when set.
/// Keep the returned handle alive for as long as logs should be written.
pub fn init(default_spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_spec)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
