// logging.rs

use crate::constants::LOG_SNIPPET_LEN;
use crate::errors::{AskboxError, AskboxResult};
use crate::models::ApiCallLog;
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle};

/// Starts the file-backed logger. The TUI binary must not write to the
/// terminal, so stderr mirroring is only enabled for the server.
///
/// The returned handle has to stay alive for the duration of the program.
pub fn init_logging(level: &str, mirror_stderr: bool) -> AskboxResult<LoggerHandle> {
    let mut logger = Logger::try_with_str(level)
        .map_err(|e| AskboxError::logging_error(format!("Bad log specification: {}", e)))?
        .log_to_file(FileSpec::default().basename("askbox").suppress_timestamp());

    if mirror_stderr {
        logger = logger.duplicate_to_stderr(Duplicate::Info);
    }

    logger
        .start()
        .map_err(|e| AskboxError::logging_error(format!("Failed to start logger: {}", e)))
}

pub fn log_api_call(entry: &ApiCallLog) {
    log::info!(
        "[{}] {} - {} - {} - {}ms",
        entry.timestamp.to_rfc3339(),
        entry.endpoint,
        entry.request_summary,
        entry.outcome,
        entry.response_time_ms
    );
}

/// Truncated request text for the api call log.
pub fn request_snippet(message: &str) -> String {
    if message.chars().count() > LOG_SNIPPET_LEN {
        let truncated: String = message.chars().take(LOG_SNIPPET_LEN).collect();
        format!("{}...", truncated)
    } else {
        message.to_string()
    }
}
