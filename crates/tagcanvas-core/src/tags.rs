//! Tags and item specifiers.
//!
//! A tag is a label attached to any number of elements. Bulk operations on
//! the scene take a [`TagOrId`], which names either a single element, every
//! element carrying a tag, the element under the pointer, or everything.

use crate::error::{CanvasError, CanvasResult};
use crate::scene::ElementId;
use std::fmt;
use std::str::FromStr;

/// Specifier matching every element.
pub const ALL: &str = "all";
/// Specifier matching the element under the pointer.
pub const CURRENT: &str = "current";

/// A validated element label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Validate and wrap a single tag.
    ///
    /// Tags may not be empty, contain whitespace, be purely numeric
    /// (those would read as element ids) or shadow the `all` / `current`
    /// specifiers.
    pub fn new(name: impl Into<String>) -> CanvasResult<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CanvasError::InvalidTag(name));
        }
        if name == ALL || name == CURRENT {
            return Err(CanvasError::ReservedTag(name));
        }
        if is_numeric(&name) {
            return Err(CanvasError::NumericTag(name));
        }
        Ok(Self(name))
    }

    /// Wrap a tag name known to be valid at compile time.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(Tag::new(name).is_ok());
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::new(s)
    }
}

/// Accepts optional sign, digits and at most one decimal point.
fn is_numeric(name: &str) -> bool {
    let body = name.strip_prefix(['+', '-']).unwrap_or(name);
    let mut digits = 0;
    let mut dots = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Ordered, duplicate-free set of tags attached to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space separated tag string. Surrounding blanks are ignored.
    pub fn parse(spec: &str) -> CanvasResult<Self> {
        spec.split_whitespace().map(Tag::new).collect()
    }

    /// Build a set from individual tag names.
    pub fn from_names<I, S>(names: I) -> CanvasResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Tag::new).collect()
    }

    /// Add a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns false if it was not present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check membership by name without validating it first.
    pub fn contains_str(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(tag.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for TagSet {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagSet::parse(s)
    }
}

/// Which elements a bulk operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOrId {
    /// Every element in the scene.
    All,
    /// The element under the pointer, if any.
    Current,
    /// Every element carrying this tag.
    Tag(Tag),
    /// A single element.
    Id(ElementId),
}

impl TagOrId {
    /// Shorthand for `TagOrId::Tag` that validates the name.
    pub fn tag(name: impl Into<String>) -> CanvasResult<Self> {
        Tag::new(name).map(TagOrId::Tag)
    }
}

impl FromStr for TagOrId {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ALL => Ok(TagOrId::All),
            CURRENT => Ok(TagOrId::Current),
            other => Tag::new(other).map(TagOrId::Tag),
        }
    }
}

impl From<Tag> for TagOrId {
    fn from(tag: Tag) -> Self {
        TagOrId::Tag(tag)
    }
}

impl From<&Tag> for TagOrId {
    fn from(tag: &Tag) -> Self {
        TagOrId::Tag(tag.clone())
    }
}

impl From<ElementId> for TagOrId {
    fn from(id: ElementId) -> Self {
        TagOrId::Id(id)
    }
}
