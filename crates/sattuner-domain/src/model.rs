use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// In-memory snapshot of the gateway's persisted settings.
///
/// The tree is an opaque nested mapping of string keys to scalars, lists,
/// and nested mappings, addressed by dotted paths with numeric list indices
/// (`interfaces.wan.blockpriv`, `system.user.0.name`).
///
/// Two invariants shape every accessor:
/// - a path that does not exist reads as unset, never as an error;
/// - a key that exists with any value (including `""`) counts as *set*;
///   the host store marks enabled booleans with empty elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree(Value);

impl Default for ConfigTree {
    fn default() -> Self {
        ConfigTree(Value::Object(Map::new()))
    }
}

impl ConfigTree {
    pub fn from_value(value: Value) -> Self {
        ConfigTree(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Read the value at a dotted path. Numeric segments index into lists.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut node = &self.0;
        for segment in path.split('.') {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// True when the path exists at all, whatever its value.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    pub fn get_array(&self, path: &str) -> Option<&Vec<Value>> {
        match self.get(path)? {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Set a value at a dotted path, creating intermediate objects as
    /// needed. A non-object in the middle of the path is replaced; list
    /// segments are not supported here (lists are reached via
    /// [`ConfigTree::ensure_array`]).
    pub fn set(&mut self, path: &str, value: Value) {
        let mut node = &mut self.0;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let map = node.as_object_mut().expect("node was just made an object");
            if segments.peek().is_none() {
                map.insert(segment.to_string(), value);
                return;
            }
            node = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }

    /// Remove the value at a dotted path, returning it if it was present.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let mut node = &mut self.0;
        let key = match path.rsplit_once('.') {
            Some((parent_path, key)) => {
                for segment in parent_path.split('.') {
                    node = match node {
                        Value::Object(map) => map.get_mut(segment)?,
                        Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
                        _ => return None,
                    };
                }
                key
            }
            None => path,
        };
        node.as_object_mut()?.remove(key)
    }

    /// Borrow the list at a dotted path mutably, creating it (and any
    /// intermediate objects) if absent. A pre-existing non-list value at the
    /// path is replaced by an empty list, matching the host store's
    /// tolerance for scalar placeholders where a list belongs.
    pub fn ensure_array(&mut self, path: &str) -> &mut Vec<Value> {
        let mut node = &mut self.0;
        for segment in path.split('.') {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let map = node.as_object_mut().expect("node was just made an object");
            node = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        if !node.is_array() {
            *node = Value::Array(Vec::new());
        }
        node.as_array_mut().expect("node was just made an array")
    }
}

/// Read a port-like value that the host may store as a string or a number.
pub fn port_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.is_empty() => s.parse().ok(),
        _ => None,
    }
}
