//! Core structural path types

use std::fmt;

use super::ROOT_PATH;

/// Parsed structural path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuralPath {
    pub(crate) segments: Vec<PathSegment>,
    /// Rendered form without the root special case (empty for the root)
    pub(crate) rendered: String,
}

/// One step of a structural path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping step (`/key` or `/"key"`)
    Key(String),
    /// Sequence step (`/*[index]`)
    Index(usize),
}

impl StructuralPath {
    /// The root path (`/`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
            rendered: String::new(),
        }
    }

    /// Rendered path; the root renders as `/`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        if self.rendered.is_empty() {
            ROOT_PATH
        } else {
            &self.rendered
        }
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl Default for StructuralPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "/{}", super::escape_key(key)),
            PathSegment::Index(index) => write!(f, "/*[{index}]"),
        }
    }
}
