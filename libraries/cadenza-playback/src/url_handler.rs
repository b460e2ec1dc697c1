//! Pluggable URL resolution
//!
//! Some tracks carry abstract URLs (streaming-service schemes) whose real
//! stream location is only known after asking the owning service. A
//! [`UrlHandler`] claims such URLs and resolves them, either immediately or
//! asynchronously; unclaimed URLs are loaded by the engine directly.
//!
//! The registry is a pure routing table: handlers are tried in registration
//! order and the first one that claims a URL is its sole resolver. It holds
//! no playback state.

use url::Url;

/// Outcome of asking a handler to resolve a URL
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The handler produced a playable URL immediately
    Loaded(Url),

    /// The handler started an asynchronous resolution; a [`LoadResult`]
    /// will be delivered later
    WillLoadAsynchronously,

    /// The handler matched the scheme but has nothing to do for this URL;
    /// the engine should load it directly
    NotApplicable,
}

/// Completion of an asynchronous resolution
///
/// Delivered by the platform into [`crate::Player::handle_load_result`] on
/// the controller's owning context.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The URL the resolution was requested for
    pub original_url: Url,

    /// The playable URL, or the reason resolution failed
    pub result: Result<Url, String>,
}

impl LoadResult {
    /// Successful resolution of `original_url` to `stream_url`
    pub fn success(original_url: Url, stream_url: Url) -> Self {
        Self {
            original_url,
            result: Ok(stream_url),
        }
    }

    /// Failed resolution
    pub fn failure(original_url: Url, message: impl Into<String>) -> Self {
        Self {
            original_url,
            result: Err(message.into()),
        }
    }
}

/// Protocol-specific URL resolver
pub trait UrlHandler: Send {
    /// Whether this handler claims `url`
    fn can_handle(&self, url: &Url) -> bool;

    /// Resolve `url` into something the engine can load
    ///
    /// Only called when [`can_handle`](Self::can_handle) returned true.
    fn resolve(&mut self, url: &Url) -> Resolution;
}

/// Identity of a registered handler
///
/// Returned by [`UrlHandlerRegistry::register`]; the controller uses it to
/// tie an in-flight asynchronous load to the handler that owns it, so that
/// unregistering the handler can cancel the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Registration-order routing table for URL handlers
#[derive(Default)]
pub struct UrlHandlerRegistry {
    handlers: Vec<(HandlerId, Box<dyn UrlHandler>)>,
    next_id: u64,
}

impl UrlHandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; later registrations are consulted later
    ///
    /// Uniqueness per scheme is not enforced.
    pub fn register(&mut self, handler: Box<dyn UrlHandler>) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove a handler
    ///
    /// Returns false if the id was not registered (e.g. already removed).
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Whether any registered handler claims `url`
    pub fn would_handle(&self, url: &Url) -> bool {
        self.handlers.iter().any(|(_, h)| h.can_handle(url))
    }

    /// Resolve `url` through the first handler that claims it
    ///
    /// Returns `None` when no handler claims the URL. No fan-out: the first
    /// match is the sole resolver, even if it answers `NotApplicable`.
    pub fn resolve(&mut self, url: &Url) -> Option<(HandlerId, Resolution)> {
        self.handlers
            .iter_mut()
            .find(|(_, h)| h.can_handle(url))
            .map(|(id, h)| (*id, h.resolve(url)))
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{Resolution, UrlHandler};
    use url::Url;

    /// Handler claiming a fixed scheme with a canned resolution
    pub struct SchemeHandler {
        pub scheme: String,
        pub resolution: Resolution,
        pub resolved: Vec<Url>,
    }

    impl SchemeHandler {
        pub fn new(scheme: &str, resolution: Resolution) -> Self {
            Self {
                scheme: scheme.to_string(),
                resolution,
                resolved: Vec::new(),
            }
        }
    }

    impl UrlHandler for SchemeHandler {
        fn can_handle(&self, url: &Url) -> bool {
            url.scheme() == self.scheme
        }

        fn resolve(&mut self, url: &Url) -> Resolution {
            self.resolved.push(url.clone());
            self.resolution.clone()
        }
    }
}
