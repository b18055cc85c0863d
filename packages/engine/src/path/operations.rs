//! Path construction and relationships

use super::escape::{push_index, push_key};
use super::types::{PathSegment, StructuralPath};

impl StructuralPath {
    /// Builds a path from segments
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        segments
            .into_iter()
            .fold(Self::root(), |path, segment| path.child(segment))
    }

    /// Appends a mapping step
    #[must_use]
    pub fn child_key(&self, key: impl Into<String>) -> Self {
        self.clone().child(PathSegment::Key(key.into()))
    }

    /// Appends a sequence step
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        self.clone().child(PathSegment::Index(index))
    }

    fn child(mut self, segment: PathSegment) -> Self {
        match &segment {
            PathSegment::Key(key) => push_key(&mut self.rendered, key),
            PathSegment::Index(index) => push_index(&mut self.rendered, *index),
        }
        self.segments.push(segment);
        self
    }

    /// All segments except the last; `None` for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self::from_segments(init.iter().cloned()))
    }

    /// Last segment; `None` for the root
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Whether `self` is a strict prefix of `other`
    #[must_use]
    pub fn is_ancestor_of(&self, other: &StructuralPath) -> bool {
        self.segments.len() < other.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }

    #[must_use]
    pub fn is_descendant_of(&self, other: &StructuralPath) -> bool {
        other.is_ancestor_of(self)
    }
}
