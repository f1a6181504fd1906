use serde_json::{Map, Value};

/// JSON-shaped drawing configuration addressed with dotted paths (`"layout.margin"`).
#[derive(Debug, Clone, PartialEq)]
pub struct AlluvialConfig(Value);

impl Default for AlluvialConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl AlluvialConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_value_mut(&mut self) -> &mut Value {
        &mut self.0
    }

    pub fn get_value(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get_value(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get_value(dotted_path)?.as_bool()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.get_value(dotted_path)?.as_f64()
    }

    pub fn get_usize(&self, dotted_path: &str) -> Option<usize> {
        self.get_value(dotted_path)?
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
    }

    /// String array at `dotted_path`; non-string items are skipped.
    pub fn get_str_list(&self, dotted_path: &str) -> Option<Vec<String>> {
        let items = self.get_value(dotted_path)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
        )
    }

    /// Writes `value` at `dotted_path`. Anything that is not an object on the way there (the
    /// root included) is replaced by an empty object.
    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        let (parents, leaf) = match dotted_path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, dotted_path),
        };

        let Some(mut cur) = object_slot(&mut self.0) else {
            return;
        };
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            let Some(next) = object_slot(cur.entry(segment).or_insert(Value::Null)) else {
                return;
            };
            cur = next;
        }
        cur.insert(leaf.to_string(), value);
    }

    /// Overlays `other`: objects merge key by key, every other value replaces what it lands on.
    pub fn deep_merge(&mut self, other: &Value) {
        merge_into(&mut self.0, other);
    }
}

fn object_slot(slot: &mut Value) -> Option<&mut Map<String, Value>> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut()
}

fn merge_into(base: &mut Value, incoming: &Value) {
    if let (Some(base_map), Value::Object(incoming_map)) = (base.as_object_mut(), incoming) {
        for (key, value) in incoming_map {
            match base_map.get_mut(key) {
                Some(slot) => merge_into(slot, value),
                None => {
                    base_map.insert(key.clone(), value.clone());
                }
            }
        }
        return;
    }
    *base = incoming.clone();
}
