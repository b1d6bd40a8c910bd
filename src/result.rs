use thiserror::Error;

/// Errors produced while building or using request-scoped views.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("request headers are sealed and cannot be modified")]
    ImmutableHeaders,
    #[error("request cookies are sealed and cannot be modified")]
    ImmutableCookies,
    #[error("malformed cookie directive: {0:?}")]
    MalformedCookieDirective(String),
    #[error("preview credential does not match the configured preview mode")]
    InvalidPreviewCredential,
    #[error("draft mode requires preview credentials, which are not configured")]
    PreviewCredentialsUnavailable,
}
