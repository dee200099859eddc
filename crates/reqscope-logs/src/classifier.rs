use regex::Regex;

use reqscope_types::{RequestEvent, Severity};

/// Full-line envelope: timestamp, level, dotted logger, message, and an
/// optional trailing bracketed annotation excluded from the message.
const LINE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} (?P<level>\w+) (?P<logger>\w+\.\w+): (?P<message>.*?)(?: \[.*?\])?$";

/// INFO message body: an HTTP method followed by a request path.
const SUCCESS_PATTERN: &str =
    r"^(?:GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS) (?P<handler>/[^ ]+)";

/// ERROR message body: the internal-server-error prefix followed by a
/// request path.
const ERROR_PATTERN: &str = r"^Internal Server Error: (?P<handler>/[^ ]+)";

/// Compiled grammars for recognizing request-log lines
#[derive(Clone, Debug)]
pub struct LineClassifier {
    /// Outer line grammar
    line: Regex,

    /// Sub-grammar for INFO message bodies
    success: Regex,

    /// Sub-grammar for ERROR message bodies
    error: Regex,

    /// Only lines from this logger are classified
    request_logger: String,
}

impl LineClassifier {
    /// Create a classifier for the given request-logger identifier
    pub fn new(request_logger: &str) -> Self {
        Self {
            line: Regex::new(LINE_PATTERN).unwrap(),
            success: Regex::new(SUCCESS_PATTERN).unwrap(),
            error: Regex::new(ERROR_PATTERN).unwrap(),
            request_logger: request_logger.to_string(),
        }
    }

    /// Get the configured request-logger identifier
    pub fn request_logger(&self) -> &str {
        &self.request_logger
    }

    /// Classify a raw log line into a request event
    ///
    /// Returns `None` for anything that is not a countable request event:
    /// lines outside the envelope grammar, lines from other loggers, levels
    /// that carry no path convention, and message bodies the level's
    /// sub-grammar does not match. The extracted path may still carry a
    /// query string.
    pub fn classify(&self, line: &str) -> Option<RequestEvent> {
        let caps = self.line.captures(line.trim())?;

        if &caps["logger"] != self.request_logger {
            return None;
        }

        let level = Severity::parse(&caps["level"])?;
        let message = caps.name("message").map(|m| m.as_str())?;

        // Only INFO and ERROR lines carry a request path
        let handler = match level {
            Severity::Info => self.success.captures(message)?,
            Severity::Error => self.error.captures(message)?,
            _ => return None,
        };

        Some(RequestEvent::new(level, handler["handler"].to_string()))
    }
}
