//! JSON-path-like locations used to report where a validation error occurred.
use std::fmt;

/// A single step in a [`JsonPath`]: either an object property or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChunk {
    Property(String),
    Index(usize),
    Keyword(&'static str),
}

impl From<&str> for PathChunk {
    fn from(value: &str) -> Self {
        PathChunk::Property(value.to_owned())
    }
}

impl From<String> for PathChunk {
    fn from(value: String) -> Self {
        PathChunk::Property(value)
    }
}

impl From<usize> for PathChunk {
    fn from(value: usize) -> Self {
        PathChunk::Index(value)
    }
}

/// A JSON-path-like string rooted at `$`, e.g. `$.foo[0].bar`.
///
/// Used both for the instance location reported in [`crate::ValidationError`]
/// and, internally, for tracking where in the schema a keyword lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    chunks: Vec<PathChunk>,
}

impl JsonPath {
    #[must_use]
    pub fn new() -> Self {
        JsonPath { chunks: Vec::new() }
    }

    #[must_use]
    pub fn push(&self, chunk: impl Into<PathChunk>) -> Self {
        let mut chunks = self.chunks.clone();
        chunks.push(chunk.into());
        JsonPath { chunks }
    }

    #[must_use]
    pub fn chunks(&self) -> &[PathChunk] {
        &self.chunks
    }

    #[must_use]
    pub fn last_property(&self) -> Option<&str> {
        self.chunks.iter().rev().find_map(|c| match c {
            PathChunk::Property(p) => Some(p.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for chunk in &self.chunks {
            match chunk {
                PathChunk::Property(p) => write!(f, ".{p}")?,
                PathChunk::Index(i) => write!(f, "[{i}]")?,
                PathChunk::Keyword(k) => write!(f, ".{k}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonPath;

    #[test]
    fn root_path_is_dollar() {
        assert_eq!(JsonPath::new().to_string(), "$");
    }

    #[test]
    fn nested_path_renders_dot_and_bracket_notation() {
        let path = JsonPath::new().push("foo").push(0usize).push("bar");
        assert_eq!(path.to_string(), "$.foo[0].bar");
    }
}
