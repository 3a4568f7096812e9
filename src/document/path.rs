use super::Value;
use compact_str::CompactString;
use core::fmt;
use regex::Regex;
use std::sync::LazyLock;

const LOG_TARGET: &str = "      path";

static INDEXED_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*)\[(\d+)\]$").expect("invalid regex"));

/// One dot-separated component of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub name: CompactString,
    pub index: Option<usize>,
}

impl PathSegment {
    fn parse(segment: &str) -> Self {
        if let Some(captures) = INDEXED_SEGMENT_REGEX.captures(segment)
            && let Ok(index) = captures[2].parse::<usize>()
        {
            return Self {
                name: captures[1].into(),
                index: Some(index),
            };
        }

        // Either no bracket suffix, or an index too large for usize: treat the whole thing as a key.
        Self {
            name: segment.into(),
            index: None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{index}]", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A parsed field path such as `MotHistory.RecordList[0].TestDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(PathSegment::parse).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Name of the final segment, without any index.
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        self.segments.last().map_or("", |segment| segment.name.as_str())
    }

    /// The path with every array index removed.
    ///
    /// Registry entries are keyed by canonical paths so one entry covers every element of a list.
    #[must_use]
    pub fn canonical(&self) -> String {
        let mut result = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                result.push('.');
            }
            result.push_str(&segment.name);
        }
        result
    }

    #[must_use]
    pub fn has_index(&self) -> bool {
        self.segments.iter().any(|segment| segment.index.is_some())
    }

    /// Walk this path from `root`.
    ///
    /// Returns `None` as soon as a step lands on nothing or on `null`. A `null` reached by the final
    /// step is returned as-is, since it is a present but empty value.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;

        for segment in &self.segments {
            if current.is_null() {
                return None;
            }

            current = current.get(&segment.name)?;

            if let Some(index) = segment.index {
                if current.is_null() {
                    return None;
                }

                let Some(element) = current.get_index(index) else {
                    log::trace!(target: LOG_TARGET, "index {index} not available on {} at segment '{segment}'", current.kind());
                    return None;
                };
                current = element;
            }
        }

        Some(current)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Resolve a dotted, optionally indexed path against a document.
#[must_use]
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    FieldPath::parse(path).resolve(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Value {
        Value::from(value)
    }

    #[test]
    fn test_parse_plain_and_indexed_segments() {
        let path = FieldPath::parse("a.b[2].c");
        assert_eq!(
            path.segments(),
            &[
                PathSegment { name: "a".into(), index: None },
                PathSegment { name: "b".into(), index: Some(2) },
                PathSegment { name: "c".into(), index: None },
            ]
        );
        assert_eq!(path.to_string(), "a.b[2].c");
        assert_eq!(path.canonical(), "a.b.c");
        assert_eq!(path.leaf_name(), "c");
        assert!(path.has_index());
    }

    #[test]
    fn test_parse_non_numeric_bracket_is_a_plain_name() {
        let path = FieldPath::parse("a.b[x]");
        assert_eq!(path.segments()[1], PathSegment { name: "b[x]".into(), index: None });

        let path = FieldPath::parse("a.b[-1]");
        assert_eq!(path.segments()[1].index, None);
    }

    #[test]
    fn test_leaf_name_drops_index() {
        assert_eq!(FieldPath::parse("Results.Items[3]").leaf_name(), "Items");
        assert_eq!(FieldPath::parse("StatusCode").leaf_name(), "StatusCode");
    }

    #[test]
    fn test_resolve_nested_index() {
        let d = doc(json!({"a": {"b": [{"c": 9}]}}));
        assert_eq!(resolve(&d, "a.b[0].c"), Some(&Value::Number(9.0)));
    }

    #[test]
    fn test_resolve_missing_root() {
        let d = doc(json!({}));
        assert_eq!(resolve(&d, "a.b[0].c"), None);
    }

    #[test]
    fn test_resolve_out_of_range_index() {
        let d = doc(json!({"a": {"b": [{"c": 9}]}}));
        assert_eq!(resolve(&d, "a.b[1].c"), None);
    }

    #[test]
    fn test_resolve_index_on_non_sequence() {
        let d = doc(json!({"a": {"b": {"c": 9}}}));
        assert_eq!(resolve(&d, "a.b[0].c"), None);
    }

    #[test]
    fn test_resolve_through_null_and_scalar() {
        let d = doc(json!({"a": null, "s": "text"}));
        assert_eq!(resolve(&d, "a.b"), None);
        assert_eq!(resolve(&d, "s.length"), None);
    }

    #[test]
    fn test_resolve_final_null_is_present() {
        let d = doc(json!({"a": {"b": null}}));
        assert_eq!(resolve(&d, "a.b"), Some(&Value::Null));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let d = doc(json!({"VehicleDetails": {"Vrm": "AB12CDE"}}));
        let first = resolve(&d, "VehicleDetails.Vrm");
        let second = resolve(&d, "VehicleDetails.Vrm");
        assert_eq!(first, second);
        assert_eq!(first.and_then(Value::as_str), Some("AB12CDE"));
    }

    #[test]
    fn test_resolve_whole_container() {
        let d = doc(json!({"list": [1, 2, 3]}));
        assert_eq!(resolve(&d, "list").and_then(Value::as_sequence).map(<[Value]>::len), Some(3));
    }
}
