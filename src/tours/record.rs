use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One tour as loaded from the data file.
///
/// The JSON object is kept verbatim, so fields beyond the four the query
/// pipeline inspects survive loading, can be sorted on, and serialize back
/// in their original order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour(Map<String, Value>);

impl Tour {
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn country(&self) -> Option<&str> {
        self.0.get("country").and_then(Value::as_str)
    }

    pub fn region(&self) -> Option<&str> {
        self.0.get("region").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.0.get("price").and_then(Value::as_f64)
    }

    /// Any field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}
