use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Stable identity of one drawing surface (a widget, canvas or DOM node).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(String);

impl SurfaceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SurfaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A bound drawing surface and the viewport it currently lives in.
///
/// `viewport` is the host window size; responsive layout decisions read its
/// width instead of querying any global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: SurfaceId,
    pub viewport: Viewport,
}

impl Surface {
    #[must_use]
    pub fn new(id: impl Into<SurfaceId>, viewport: Viewport) -> Self {
        Self {
            id: id.into(),
            viewport,
        }
    }
}
