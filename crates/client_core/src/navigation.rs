use url::Url;

/// Capability for leaving the application for an external destination, such
/// as the payment processor's onboarding page. Injected so tests can record
/// the intended destination instead of mutating a browsing context.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, url: &Url);
}
