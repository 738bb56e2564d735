//! CanvasSource - how configuration names the host surface.

use std::fmt;

use log::warn;

use crate::error::{DisplayError, Result};

/// Either a surface handed over directly, or a key resolved once when the
/// display is prepared.
pub enum CanvasSource<S> {
    Surface(S),
    Lookup {
        key: String,
        resolve: Box<dyn FnOnce(&str) -> Option<S>>,
    },
}

impl<S> CanvasSource<S> {
    /// A surface found by key at preparation time.
    pub fn lookup<F>(key: impl Into<String>, resolve: F) -> Self
    where
        F: FnOnce(&str) -> Option<S> + 'static,
    {
        Self::Lookup {
            key: key.into(),
            resolve: Box::new(resolve),
        }
    }

    /// Resolve to a concrete surface.
    ///
    /// Fails with [`DisplayError::HostUnavailable`] if the key does not
    /// resolve.
    pub fn prepare(self) -> Result<S> {
        match self {
            Self::Surface(surface) => Ok(surface),
            Self::Lookup { key, resolve } => match resolve(&key) {
                Some(surface) => Ok(surface),
                None => {
                    warn!("canvas lookup {key:?} did not resolve");
                    Err(DisplayError::HostUnavailable { key })
                }
            },
        }
    }
}

impl<S> From<S> for CanvasSource<S> {
    fn from(surface: S) -> Self {
        Self::Surface(surface)
    }
}

impl<S> fmt::Debug for CanvasSource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(_) => f.write_str("CanvasSource::Surface(..)"),
            Self::Lookup { key, .. } => f.debug_struct("CanvasSource::Lookup").field("key", key).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemoryDocument, MemorySurface};

    #[test]
    fn test_direct_surface() {
        let source: CanvasSource<MemorySurface> = MemorySurface::new().into();
        assert!(source.prepare().is_ok());
    }

    #[test]
    fn test_lookup_hit() {
        let mut document = MemoryDocument::new();
        document.insert("matrix", MemorySurface::new());
        let source = CanvasSource::lookup("matrix", move |key| document.take(key));
        assert_eq!(format!("{source:?}"), "CanvasSource::Lookup { key: \"matrix\" }");
        assert!(source.prepare().is_ok());
    }

    #[test]
    fn test_lookup_miss() {
        let source: CanvasSource<MemorySurface> = CanvasSource::lookup("missing", |_| None);
        match source.prepare() {
            Err(DisplayError::HostUnavailable { key }) => assert_eq!(key, "missing"),
            other => panic!("expected HostUnavailable, got {other:?}"),
        }
    }
}
