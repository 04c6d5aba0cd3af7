// Wire contract
pub const ASK_ENDPOINT_PATH: &str = "/api/ask";

// Fixed user-facing strings. The client renders NETWORK_ERROR_REPLY for
// every failed round trip, regardless of cause; the server owns the other
// two.
pub const NETWORK_ERROR_REPLY: &str = "Network error. Please try again.";
pub const EMPTY_QUESTION_REPLY: &str = "Please type a question.";
pub const NO_MATCH_REPLY: &str =
    "Sorry, I couldn't find an exact answer. Please contact an admin or try rephrasing your question.";

// Defaults
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/ask";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DB_PATH: &str = "askbox.sqlite";

// Length cap for the request snippet written to the api call log.
pub const LOG_SNIPPET_LEN: usize = 120;
