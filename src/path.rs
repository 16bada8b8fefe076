use std::fmt;

/// One step from a parent node to a child node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Key(&'static str),
    Index(usize),
}

/// Locator of a node inside a document, displayed as `network.stations[3].name`.
///
/// Keys are `'static` because every key the mapper visits comes from a record
/// shape known at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The path of the document itself.
    pub fn root() -> FieldPath {
        FieldPath::default()
    }

    pub fn key(&self, key: &'static str) -> FieldPath {
        self.child(Segment::Key(key))
    }

    pub fn index(&self, index: usize) -> FieldPath {
        self.child(Segment::Index(index))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn child(&self, segment: Segment) -> FieldPath {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        FieldPath { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<document>");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_nested_path() {
        let path = FieldPath::root()
            .key("network")
            .key("stations")
            .index(3)
            .key("name");
        assert_eq!(path.to_string(), "network.stations[3].name");
    }

    #[test]
    fn display_root() {
        assert_eq!(FieldPath::root().to_string(), "<document>");
    }

    #[test]
    fn child_does_not_touch_parent() {
        let network = FieldPath::root().key("network");
        let company = network.key("company").index(0);
        assert_eq!(network.to_string(), "network");
        assert_eq!(company.to_string(), "network.company[0]");
        assert_eq!(company.segments().len(), 3);
    }
}
