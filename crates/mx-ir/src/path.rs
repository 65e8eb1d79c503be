//! Field paths for attributing errors inside a message tree

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field
    Field(String),
    /// An element of a repeated field
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Address of a value relative to the validation root, rendered as
/// `a.b.[2].c`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path (the validation root itself)
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Single-segment path naming a field
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Append a field segment
    pub fn push_field(&mut self, name: impl Into<String>) {
        self.segments.push(PathSegment::Field(name.into()));
    }

    /// Append an index segment
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Remove the last segment
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// This path followed by a field segment
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut path = self.clone();
        path.push_field(name);
        path
    }

    /// This path followed by an index segment
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push_index(index);
        path
    }

    /// Whether the path ends with the given rendered suffix
    /// (e.g. `[1].end_to_end_id`)
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        let rendered = self.to_string();
        rendered == suffix || rendered.ends_with(&format!(".{suffix}"))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    /// Parse a rendered path such as `cdt_trf_tx_inf.[1].pmt_id.uetr`.
    fn from_str(path: &str) -> Result<Self> {
        let mut segments = Vec::new();
        if path.is_empty() {
            return Ok(Self { segments });
        }

        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(Error::invalid_path(path, "empty segment"));
            }
            if let Some(inner) = segment.strip_prefix('[') {
                let digits = inner
                    .strip_suffix(']')
                    .ok_or_else(|| Error::invalid_path(path, format!("unclosed bracket in '{segment}'")))?;
                let index = digits
                    .parse()
                    .map_err(|_| Error::invalid_path(path, format!("invalid index in '{segment}'")))?;
                segments.push(PathSegment::Index(index));
            } else if segment.contains(['[', ']']) {
                return Err(Error::invalid_path(
                    path,
                    format!("unexpected bracket in '{segment}'"),
                ));
            } else {
                segments.push(PathSegment::Field(segment.to_string()));
            }
        }

        Ok(Self { segments })
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_indices() {
        let mut path = FieldPath::field("a");
        path.push_field("b");
        path.push_index(2);
        path.push_field("c");

        assert_eq!(path.to_string(), "a.b.[2].c");
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&PathSegment::Field("c".to_string())));
    }

    #[test]
    fn test_root_renders_empty() {
        assert_eq!(FieldPath::root().to_string(), "");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn test_push_and_pop() {
        let mut path = FieldPath::root();
        path.push_field("adr_line");
        path.push_index(0);
        assert_eq!(path.pop(), Some(PathSegment::Index(0)));
        assert_eq!(path.to_string(), "adr_line");
    }

    #[test]
    fn test_parse_round_trip() {
        let path: FieldPath = "cdt_trf_tx_inf.[1].pmt_id.uetr".parse().unwrap();
        assert_eq!(path.segments()[1], PathSegment::Index(1));
        assert_eq!(path.to_string(), "cdt_trf_tx_inf.[1].pmt_id.uetr");
    }

    #[test]
    fn test_parse_errors() {
        assert!("a..b".parse::<FieldPath>().is_err());
        assert!("a.[x]".parse::<FieldPath>().is_err());
        assert!("a.[1".parse::<FieldPath>().is_err());
        assert!("a[1]".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_ends_with() {
        let path: FieldPath = "tx.[1].end_to_end_id".parse().unwrap();
        assert!(path.ends_with("[1].end_to_end_id"));
        assert!(path.ends_with("end_to_end_id"));
        assert!(!path.ends_with("[0].end_to_end_id"));
        assert!(!path.ends_with("to_end_id"));
    }
}
