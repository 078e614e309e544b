//! Flattening of call parameters into form fields.
//!
//! Conduit expects `application/x-www-form-urlencoded` bodies where nested
//! values use bracketed keys: `constraints[ids][0]=1`. Scalars render in
//! display form, `null` as an empty value, sequences with explicit
//! indices. Percent-encoding of the final pairs is the transport's job.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::client::Params;

/// Serialize typed parameters into the ordered map a call sends.
///
/// Anything that does not serialize to a JSON object (or `null`) is a
/// programmer error and surfaces as a plain `serde_json::Error`.
pub(crate) fn to_params<P>(params: &P) -> Result<Params, serde_json::Error>
where
    P: Serialize + ?Sized,
{
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(serde_json::Error::custom(format!(
            "call parameters must serialize to an object, got {other}"
        ))),
    }
}

/// Flatten an ordered parameter map into form fields, in map order.
pub(crate) fn flatten(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    for (key, value) in params {
        push_value(&mut fields, key.clone(), value);
    }
    fields
}

fn push_value(fields: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => fields.push((key, String::new())),
        Value::Bool(flag) => fields.push((key, flag.to_string())),
        Value::Number(number) => fields.push((key, number.to_string())),
        Value::String(text) => fields.push((key, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_value(fields, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(entries) => {
            for (name, item) in entries {
                push_value(fields, format!("{key}[{name}]"), item);
            }
        }
    }
}
