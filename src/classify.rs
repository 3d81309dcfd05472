//! Request-path classification for SPA fallback routing.

/// What a request path addresses, decided from the path string alone and
/// never from whether the target actually exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// The single-page entry document; client-side routing takes over.
    SpaEntry,
    /// A concrete file addressed by extension, served as-is or 404.
    StaticAsset,
    /// An `/api`-prefixed path. No API namespace exists today, so these
    /// fall through to static serving (and normally 404); the tag keeps
    /// the namespace reserved without re-deriving the heuristic later.
    ApiOrOther,
}

/// Classify a request path.
///
/// `/` and any extension-less path outside `/api` load the entry document,
/// so client-side routes like `/about` survive a hard refresh. This is a
/// heuristic on the path string: `/about` is `SpaEntry` even if no such
/// client-side route exists, and `/favicon.ico` is `StaticAsset` even if
/// the file is absent. Existence is resolved downstream by the asset
/// source.
pub fn classify(path: &str) -> PathClass {
    if path == "/" {
        return PathClass::SpaEntry;
    }
    if path.starts_with("/api") {
        return PathClass::ApiOrOther;
    }
    if !path.contains('.') {
        return PathClass::SpaEntry;
    }
    PathClass::StaticAsset
}
