//! Recursive merge of two tree values

use crate::domain::MergeStrategy;
use crate::merge::{IgnoreSet, MergeError};
use crate::tree::{KeyPath, Kind, Mapping, Value};

/// Settings fixed for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    ignore: IgnoreSet,
    strategy: MergeStrategy,
}

impl MergeOptions {
    pub fn new(ignore: IgnoreSet, strategy: MergeStrategy) -> Self {
        Self { ignore, strategy }
    }

    /// Keys skipped while merging mappings
    pub fn ignore(&self) -> &IgnoreSet {
        &self.ignore
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Merge `right` into `left` and return the combined tree.
///
/// `left` is consumed. By the shape of `left`:
/// - sequence: `right` must be a sequence; elements are appended in order
/// - mapping: `right` must be a mapping; keys are merged per [`MergeOptions`]
/// - anything else: `right` replaces `left`
pub fn merge(left: Value, right: Value, options: &MergeOptions) -> Result<Value, MergeError> {
    merge_at(&KeyPath::root(), left, right, options)
}

fn merge_at(
    path: &KeyPath,
    left: Value,
    right: Value,
    options: &MergeOptions,
) -> Result<Value, MergeError> {
    tracing::debug!(%path, left = %Kind::of(&left), right = %Kind::of(&right), "merge");

    match left {
        Value::Sequence(mut items) => match right {
            Value::Sequence(incoming) => {
                items.extend(incoming);
                Ok(Value::Sequence(items))
            }
            other => Err(mismatch(path, Kind::Sequence, &other)),
        },
        Value::Mapping(map) => match right {
            Value::Mapping(incoming) => {
                merge_mappings(path, map, incoming, options).map(Value::Mapping)
            }
            other => Err(mismatch(path, Kind::Mapping, &other)),
        },
        _ => Ok(right),
    }
}

fn merge_mappings(
    path: &KeyPath,
    mut left: Mapping,
    right: Mapping,
    options: &MergeOptions,
) -> Result<Mapping, MergeError> {
    for (key, right_value) in right {
        if options.ignore.matches(&key) {
            tracing::debug!(%path, key = ?key, "skipping ignored key");
            continue;
        }

        if let Some(slot) = left.get_mut(&key) {
            match options.strategy {
                MergeStrategy::Override => *slot = right_value,
                MergeStrategy::DeepMerge => {
                    let current = std::mem::take(slot);
                    *slot = merge_at(&path.child(&key), current, right_value, options)?;
                }
            }
        } else {
            left.insert(key, right_value);
        }
    }
    Ok(left)
}

fn mismatch(path: &KeyPath, expected: Kind, actual: &Value) -> MergeError {
    MergeError::TypeMismatch { path: path.clone(), expected, actual: Kind::of(actual) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).expect("valid yaml")
    }

    fn deep() -> MergeOptions {
        MergeOptions::default()
    }

    fn overriding() -> MergeOptions {
        MergeOptions::default().with_strategy(MergeStrategy::Override)
    }

    #[test]
    fn sequences_concatenate_in_order() {
        let merged = merge(yaml("[1, 2]"), yaml("[3, 4]"), &deep()).expect("merge");
        assert_eq!(merged, yaml("[1, 2, 3, 4]"));
    }

    #[test]
    fn sequences_keep_duplicates() {
        let merged = merge(yaml("[a, b]"), yaml("[b, a]"), &deep()).expect("merge");
        assert_eq!(merged, yaml("[a, b, b, a]"));
    }

    #[test]
    fn nested_mappings_deep_merge() {
        let merged = merge(yaml("a: {x: 1}"), yaml("a: {y: 2}"), &deep()).expect("merge");
        assert_eq!(merged, yaml("a: {x: 1, y: 2}"));
    }

    #[test]
    fn override_replaces_conflicting_value() {
        let merged = merge(yaml("a: 1"), yaml("a: 2"), &overriding()).expect("merge");
        assert_eq!(merged, yaml("a: 2"));
    }

    #[test]
    fn scalar_conflict_takes_right_under_deep_merge() {
        let merged = merge(yaml("a: 1"), yaml("a: 2"), &deep()).expect("merge");
        assert_eq!(merged, yaml("a: 2"));
    }

    #[test]
    fn override_does_not_recurse_into_mappings() {
        let merged = merge(yaml("a: {x: 1}"), yaml("a: {y: 2}"), &overriding()).expect("merge");
        assert_eq!(merged, yaml("a: {y: 2}"));
    }

    #[test]
    fn override_does_not_concatenate_nested_sequences() {
        let merged = merge(yaml("a: [1, 2]"), yaml("a: [3]"), &overriding()).expect("merge");
        assert_eq!(merged, yaml("a: [3]"));

        let merged = merge(yaml("a: [1, 2]"), yaml("a: [3]"), &deep()).expect("merge");
        assert_eq!(merged, yaml("a: [1, 2, 3]"));
    }

    #[test]
    fn override_still_merges_top_level_sequences() {
        let merged = merge(yaml("[1]"), yaml("[2]"), &overriding()).expect("merge");
        assert_eq!(merged, yaml("[1, 2]"));
    }

    #[test]
    fn new_keys_are_inserted_without_type_checks() {
        let merged = merge(yaml("a: 1"), yaml("b: [x]"), &deep()).expect("merge");
        assert_eq!(merged, yaml("{a: 1, b: [x]}"));
    }

    #[test]
    fn ignored_keys_keep_left_value() {
        let options = deep().with_ignore(IgnoreSet::new(["a"]));
        let merged = merge(yaml("{a: 1, b: 2}"), yaml("{a: 9, b: 9}"), &options).expect("merge");
        assert_eq!(merged, yaml("{a: 1, b: 9}"));
    }

    #[test]
    fn ignored_keys_are_not_added_when_missing_on_left() {
        let options = deep().with_ignore(IgnoreSet::new(["secret"]));
        let merged = merge(yaml("a: 1"), yaml("{secret: x, b: 2}"), &options).expect("merge");
        assert_eq!(merged, yaml("{a: 1, b: 2}"));
    }

    #[test]
    fn ignored_keys_apply_at_every_depth() {
        let options = deep().with_ignore(IgnoreSet::new(["token"]));
        let merged =
            merge(yaml("db: {token: a, host: h}"), yaml("db: {token: b, port: 1}"), &options)
                .expect("merge");
        assert_eq!(merged, yaml("db: {token: a, host: h, port: 1}"));
    }

    #[test]
    fn ignored_keys_never_inspect_the_right_value() {
        let options = deep().with_ignore(IgnoreSet::new(["list"]));
        let merged = merge(yaml("list: [1]"), yaml("list: {not: a list}"), &options)
            .expect("ignored mismatch is not an error");
        assert_eq!(merged, yaml("list: [1]"));
    }

    #[test]
    fn ignore_does_not_touch_sequence_elements() {
        let options = deep().with_ignore(IgnoreSet::new(["a"]));
        let merged = merge(yaml("[a]"), yaml("[a, b]"), &options).expect("merge");
        assert_eq!(merged, yaml("[a, a, b]"));
    }

    #[test]
    fn sequence_against_mapping_fails() {
        let err = merge(yaml("[1, 2]"), yaml("a: 1"), &deep()).expect_err("mismatch");
        assert_eq!(
            err,
            MergeError::TypeMismatch {
                path: KeyPath::root(),
                expected: Kind::Sequence,
                actual: Kind::Mapping,
            }
        );
    }

    #[test]
    fn mapping_against_sequence_fails() {
        let err = merge(yaml("a: 1"), yaml("[1, 2]"), &deep()).expect_err("mismatch");
        assert!(matches!(
            err,
            MergeError::TypeMismatch { expected: Kind::Mapping, actual: Kind::Sequence, .. }
        ));
    }

    #[test]
    fn mapping_against_scalar_fails() {
        let err = merge(yaml("a: 1"), yaml("plain"), &deep()).expect_err("mismatch");
        assert!(matches!(err, MergeError::TypeMismatch { actual: Kind::String, .. }));
    }

    #[test]
    fn nested_mismatch_reports_key_path() {
        let err = merge(
            yaml("service: {ports: [80]}"),
            yaml("service: {ports: {http: 80}}"),
            &deep(),
        )
        .expect_err("mismatch");
        assert_eq!(err.path().to_string(), "service.ports");
        assert_eq!(
            err.to_string(),
            "type mismatch at service.ports: cannot merge mapping into sequence"
        );
    }

    #[test]
    fn override_never_reports_nested_mismatch() {
        let merged =
            merge(yaml("a: [1]"), yaml("a: {b: 2}"), &overriding()).expect("override replaces");
        assert_eq!(merged, yaml("a: {b: 2}"));
    }

    #[test]
    fn scalar_left_is_replaced_by_any_shape() {
        for right in ["[1]", "{a: 1}", "text", "~"] {
            let merged = merge(yaml("42"), yaml(right), &deep()).expect("merge");
            assert_eq!(merged, yaml(right));
        }
    }

    #[test]
    fn null_left_is_replaced() {
        let merged = merge(yaml("a: ~"), yaml("a: {b: 1}"), &deep()).expect("merge");
        assert_eq!(merged, yaml("a: {b: 1}"));
    }

    #[test]
    fn tagged_left_is_replaced() {
        let merged = merge(yaml("a: !env HOME"), yaml("a: {b: 1}"), &deep()).expect("merge");
        assert_eq!(merged, yaml("a: {b: 1}"));
    }

    #[test]
    fn override_is_idempotent_for_mappings() {
        let doc = yaml("{a: 1, b: {c: [1, 2]}, d: text}");
        let merged = merge(doc.clone(), doc.clone(), &overriding()).expect("merge");
        assert_eq!(merged, doc);
    }

    #[test]
    fn left_key_order_is_preserved() {
        let merged = merge(yaml("{z: 1, a: 1}"), yaml("{a: 2, m: 3}"), &deep()).expect("merge");
        let keys: Vec<&str> = merged
            .as_mapping()
            .expect("mapping")
            .keys()
            .map(|k| k.as_str().expect("string key"))
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
