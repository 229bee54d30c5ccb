//! What a successful fetch hands back to the caller.

use super::hash::check_hash;

/// Optional response headers collected on request.
///
/// A field is `None` when the header was absent or longer than the
/// configured header limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Value of the `ETag` header.
    pub etag: Option<String>,
    /// Value of the `Content-MD5` header.
    pub content_hash: Option<String>,
}

impl ResponseMetadata {
    /// Verify `body` against the advertised content hash.
    ///
    /// Returns `None` when the server sent no content hash.
    pub fn verify(&self, body: &[u8]) -> Option<bool> {
        self.content_hash
            .as_deref()
            .map(|hash| check_hash(hash, body, body.len()))
    }
}

/// A fully downloaded resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The complete body; exactly `size` bytes.
    pub body: Vec<u8>,
    /// Body size announced by the server and received in full.
    pub size: u64,
    /// Status of the terminal, non-redirect response.
    pub status_code: u16,
    /// Collected headers, present only when requested.
    pub metadata: Option<ResponseMetadata>,
}

impl FetchResult {
    /// The advertised `ETag`, if collected.
    pub fn etag(&self) -> Option<&str> {
        self.metadata.as_ref()?.etag.as_deref()
    }

    /// The advertised `Content-MD5`, if collected.
    pub fn content_hash(&self) -> Option<&str> {
        self.metadata.as_ref()?.content_hash.as_deref()
    }

    /// Verify the body against the advertised content hash.
    ///
    /// Returns `None` when no content hash was collected.
    pub fn verify(&self) -> Option<bool> {
        self.metadata.as_ref()?.verify(&self.body)
    }

    /// Consume the result and take ownership of the body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
