//! Display-label construction for graph nodes.

use wiregraph_error::{Error, Result};

use wiregraph_core::{ObjectRef, simple_type_name};

use crate::index::InstanceIndex;

/// Build the display label for one graph node.
///
/// The base label is the cleaned simple type name. When the graph holds
/// more than one instance of that type, a ` # position/total` suffix
/// disambiguates them. Quoting for the output format is the serializer's
/// concern; this returns the logical name.
///
/// An empty cleaned name or a node missing from the index indicates a
/// collaborator contract breach and fails with `InvariantViolation`.
pub fn node_label(node: ObjectRef<'_>, index: &InstanceIndex) -> Result<String> {
    let name = simple_type_name(node.type_name());
    if name.is_empty() {
        return Err(Error::invariant_violation("object has no resolvable type name")
            .with_operation("collect::node_label")
            .with_context("type_name", node.type_name()));
    }

    let (position, total) = index.get(node.id()).ok_or_else(|| {
        Error::invariant_violation("object missing from instance index")
            .with_operation("collect::node_label")
            .with_context("object", node.id().to_string())
    })?;

    if total > 1 {
        Ok(format!("{name} # {position}/{total}"))
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use pretty_assertions::assert_eq;
    use wiregraph_core::GraphObject;
    use wiregraph_error::ErrorKind;

    struct Worker {
        _value: u32,
    }
    impl GraphObject for Worker {}

    struct Nameless {
        _value: u32,
    }
    impl GraphObject for Nameless {
        fn type_name(&self) -> &'static str {
            ""
        }
    }

    #[test]
    fn test_singleton_has_no_suffix() {
        let worker = Worker { _value: 0 };
        let node = ObjectRef::new(&worker);
        let index = build_index(&[node]);

        assert_eq!(node_label(node, &index).expect("label"), "Worker");
    }

    #[test]
    fn test_twins_get_instance_suffix() {
        let workers = [Worker { _value: 0 }, Worker { _value: 0 }];
        let nodes: Vec<_> = workers.iter().map(|w| ObjectRef::new(w)).collect();
        let index = build_index(&nodes);

        let mut labels: Vec<_> = nodes
            .iter()
            .map(|node| node_label(*node, &index).expect("label"))
            .collect();
        labels.sort();
        assert_eq!(labels, vec!["Worker # 1/2", "Worker # 2/2"]);
    }

    #[test]
    fn test_missing_index_entry_is_invariant_violation() {
        let indexed = Worker { _value: 0 };
        let missing = Worker { _value: 0 };
        let index = build_index(&[ObjectRef::new(&indexed)]);

        let err = node_label(ObjectRef::new(&missing), &index).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_empty_type_name_is_invariant_violation() {
        let nameless = Nameless { _value: 0 };
        let node = ObjectRef::new(&nameless);
        let index = build_index(&[node]);

        let err = node_label(node, &index).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    }
}
