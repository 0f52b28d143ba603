/// Errors raised by the telemetry channel.
///
/// Most send failures are deliberately *not* represented here: per §7 of the design, routine
/// upload failures are logged through the [`DiagnosticsSink`](crate::diagnostics::DiagnosticsSink)
/// and never surfaced across the client API. This enum only covers the few conditions that are
/// fatal to an individual call.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The client was initialized with an empty instrumentation key.
    #[error("instrumentation key must not be empty")]
    EmptyInstrumentationKey,

    /// The configured endpoint could not be parsed as a URI.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] http::uri::InvalidUri),

    /// No HTTP client was configured and the `reqwest-client` feature is disabled, so there is no
    /// default transport to fall back to.
    #[error("no http client configured and the `reqwest-client` feature is disabled")]
    MissingHttpClient,
}
