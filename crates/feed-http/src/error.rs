//! Mapping of reqwest failures onto the gateway error contract

use feed_core::FetchError;

/// Map a reqwest error into a [`FetchError`]
///
/// Everything that happens before a status line arrives is transport;
/// body-decoding failures are reported separately by the gateway.
pub(crate) fn map_transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        FetchError::Transport(format!("connection failed: {err}"))
    } else {
        FetchError::Transport(err.to_string())
    }
}
