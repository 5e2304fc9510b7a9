//! Request and response envelopes for unary calls.
//!
//! Envelopes carry one wire message plus protocol metadata. The clients in
//! the `modreg` crate unwrap them so callers only ever see the message
//! payload they asked for.

/// An ordered set of wire headers attached to a request or reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Create an empty metadata set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Look up the first header with the given name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of headers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wire request envelope: one message plus request metadata.
#[derive(Debug, Clone)]
pub struct Request<T> {
    message: T,
    metadata: Metadata,
}

impl<T> Request<T> {
    /// Wrap a message in a request envelope with empty metadata.
    #[must_use]
    pub fn new(message: T) -> Self {
        Self {
            message,
            metadata: Metadata::new(),
        }
    }

    /// Attach a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name, value);
        self
    }

    /// The wrapped message.
    pub fn message(&self) -> &T {
        &self.message
    }

    /// The request metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Split the envelope into message and metadata.
    pub fn into_parts(self) -> (T, Metadata) {
        (self.message, self.metadata)
    }
}

/// Wire response envelope: one message plus reply metadata.
#[derive(Debug, Clone)]
pub struct Response<T> {
    message: T,
    metadata: Metadata,
}

impl<T> Response<T> {
    /// Wrap a message with the metadata the transport returned alongside it.
    #[must_use]
    pub fn new(message: T, metadata: Metadata) -> Self {
        Self { message, metadata }
    }

    /// The wrapped message.
    pub fn message(&self) -> &T {
        &self.message
    }

    /// The reply metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Consume the envelope, keeping only the message.
    pub fn into_message(self) -> T {
        self.message
    }
}
