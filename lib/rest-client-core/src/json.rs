//! JSON binding of response content.
//!
//! Both functions go through `serde_path_to_error`, so a failure names the
//! exact path of the offending value (e.g. `[1].name`). Binding is
//! all-or-nothing: a failure never yields a partial value.

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Bind `json` to a single `T`.
///
/// # Example
///
/// ```
/// use rest_client_core::bind_object;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Item { id: u64, name: String }
///
/// let item: Item = bind_object(r#"{"id":1,"name":"a"}"#).expect("bind");
/// assert_eq!(item, Item { id: 1, name: "a".to_string() });
/// ```
pub fn bind_object<T: DeserializeOwned>(json: &str) -> Result<T> {
    deserialize(json).map_err(|(path, source)| Error::JsonObject { path, source })
}

/// Bind `json`, a JSON array, to a `Vec<T>` in document order.
///
/// # Example
///
/// ```
/// use rest_client_core::bind_list;
///
/// let ids: Vec<u32> = bind_list("[3, 1, 2]").expect("bind");
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn bind_list<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    deserialize(json).map_err(|(path, source)| Error::JsonList { path, source })
}

fn deserialize<T: DeserializeOwned>(
    json: &str,
) -> std::result::Result<T, (String, serde_json::Error)> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| (e.path().to_string(), e.into_inner()))?;
    // Trailing content after the value is malformed input too.
    deserializer.end().map_err(|e| (String::from("."), e))?;
    Ok(value)
}
