//! Compact selector rendering for logs and diagnostics

use std::fmt;

use super::ast::{RecursionLimit, Selector};

impl fmt::Display for RecursionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecursionLimit::None => f.write_str("none"),
            RecursionLimit::Depth(depth) => write!(f, "depth={depth}"),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Matcher { only_if, label } => {
                f.write_str("Matcher")?;
                match (only_if, label) {
                    (None, None) => Ok(()),
                    (Some(condition), None) => write!(f, "(if {condition})"),
                    (None, Some(label)) => write!(f, "(label={label})"),
                    (Some(condition), Some(label)) => {
                        write!(f, "(if {condition}, label={label})")
                    }
                }
            }
            Selector::ExploreAll { next } => write!(f, "All({next})"),
            Selector::ExploreFields { fields } => {
                f.write_str("Fields{")?;
                for (i, (name, selector)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{name}': {selector}")?;
                }
                f.write_str("}")
            }
            Selector::ExploreIndex { index, next } => write!(f, "Index({index}, {next})"),
            Selector::ExploreRange { start, end, next } => {
                write!(f, "Range({start}..{end}, {next})")
            }
            Selector::ExploreRecursive {
                limit,
                sequence,
                stop_at,
            } => match stop_at {
                Some(condition) => write!(f, "Recursive({limit}, {sequence}, stop={condition})"),
                None => write!(f, "Recursive({limit}, {sequence})"),
            },
            Selector::ExploreUnion { list } => {
                f.write_str("Union[")?;
                for (i, selector) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{selector}")?;
                }
                f.write_str("]")
            }
            Selector::ExploreConditional { condition, next } => {
                write!(f, "If({condition}, {next})")
            }
            Selector::ExploreRecursiveEdge => f.write_str("Edge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::NodeKind;
    use crate::selector::{Condition, RecursionLimit, Selector};

    #[test]
    fn test_render_nested_selector() {
        let selector = Selector::explore_fields([
            ("a", Selector::explore_all(Selector::labeled_matcher("leaf"))),
            (
                "c",
                Selector::explore_recursive_until(
                    RecursionLimit::Depth(3),
                    Selector::explore_union([
                        Selector::matcher(),
                        Selector::explore_range(0, 2, Selector::recursive_edge()),
                    ]),
                    Condition::is_kind(NodeKind::Scalar),
                ),
            ),
        ]);

        assert_eq!(
            selector.to_string(),
            "Fields{'a': All(Matcher(label=leaf)), 'c': Recursive(depth=3, \
             Union[Matcher, Range(0..2, Edge)], stop=kind(Scalar))}"
        );
    }
}
