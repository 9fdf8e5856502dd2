//! The generic SObject record and CRUD result types.
//!
//! An [`SObject`] is a schema-free JSON object. Type metadata lives where the
//! REST API puts it, under `attributes.type`, and the record id is the ordinary
//! `Id` field, so a record decoded from a response re-encodes to the same
//! document.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Key of the metadata object carried by every record the API returns.
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Key of the record id.
pub const ID_KEY: &str = "Id";

const TYPE_KEY: &str = "type";
const URL_KEY: &str = "url";

/// Fields that are never sent back to the server on create/update/upsert.
pub const DEFAULT_BLACKLIST: &[&str] = &[ATTRIBUTES_KEY, ID_KEY];

/// A generic Salesforce record.
///
/// Field order is kept as inserted (or as received), so decoding a response
/// and encoding it again yields the same document.
///
/// # Example
///
/// ```
/// use sforce_rest::SObject;
///
/// let case = SObject::new("Case")
///     .set("Subject", "Printer on fire")
///     .set("Priority", "High");
///
/// assert_eq!(case.sobject_type(), "Case");
/// assert_eq!(case.string_field("Subject"), "Printer on fire");
/// assert_eq!(case.id(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SObject {
    fields: Map<String, Value>,
}

impl SObject {
    /// Create an empty record of the given type.
    ///
    /// An empty type name creates an untyped record.
    pub fn new(sobject_type: impl Into<String>) -> Self {
        let mut obj = Self::default();
        let sobject_type = sobject_type.into();
        if !sobject_type.is_empty() {
            obj.set_type(sobject_type);
        }
        obj
    }

    /// Wrap an existing JSON object.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The record's type name, or `""` if unset.
    pub fn sobject_type(&self) -> &str {
        self.attribute(TYPE_KEY)
    }

    /// Set the record's type name.
    pub fn set_type(&mut self, sobject_type: impl Into<String>) -> &mut Self {
        let sobject_type = Value::String(sobject_type.into());
        match self.fields.get_mut(ATTRIBUTES_KEY) {
            Some(Value::Object(attrs)) => {
                attrs.insert(TYPE_KEY.to_string(), sobject_type);
            }
            Some(other) => *other = json!({ TYPE_KEY: sobject_type }),
            None => {
                self.fields
                    .insert(ATTRIBUTES_KEY.to_string(), json!({ TYPE_KEY: sobject_type }));
            }
        }
        self
    }

    /// The self-referencing URL the server put in `attributes`, or `""`.
    pub fn attributes_url(&self) -> &str {
        self.attribute(URL_KEY)
    }

    /// The record id, or `""` if the record has not been created yet.
    pub fn id(&self) -> &str {
        self.string_field(ID_KEY)
    }

    /// Set the record id.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.insert(ID_KEY, id.into());
        self
    }

    /// Builder-style [`set_id`](Self::set_id).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Get a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Returns true if the field is present, even if null.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All fields, metadata included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, returning its fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Number of fields, metadata included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Lenient typed accessors
    // =========================================================================

    /// String value of a field, `""` if missing or not a string.
    pub fn string_field(&self, name: &str) -> &str {
        self.get(name).and_then(Value::as_str).unwrap_or_default()
    }

    /// Boolean value of a field, `false` if missing or not a boolean.
    pub fn bool_field(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or_default()
    }

    /// Integer value of a field, `0` if missing or not an integer.
    pub fn i64_field(&self, name: &str) -> i64 {
        self.get(name).and_then(Value::as_i64).unwrap_or_default()
    }

    /// Numeric value of a field, `0.0` if missing or not a number.
    pub fn f64_field(&self, name: &str) -> f64 {
        self.get(name).and_then(Value::as_f64).unwrap_or_default()
    }

    /// A related record embedded in a field (e.g. `Owner` on a queried
    /// `Case`), or an empty record if the field is missing or not an object.
    pub fn sobject_field(&self, name: &str) -> SObject {
        match self.get(name) {
            Some(Value::Object(fields)) => SObject::from_fields(fields.clone()),
            _ => SObject::default(),
        }
    }

    /// Copy of this record without the named fields.
    ///
    /// Names match exactly and case-sensitively. The receiver is untouched.
    pub fn redacted_copy(&self, excluded: &[&str]) -> SObject {
        let fields = self
            .fields
            .iter()
            .filter(|(name, _)| !excluded.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        SObject { fields }
    }

    /// Replace every field with those of `fetched`.
    ///
    /// The current type and id survive unless `fetched` carries its own.
    pub(crate) fn replace_with(&mut self, fetched: SObject) {
        let sobject_type = self.sobject_type().to_string();
        let id = self.id().to_string();

        self.fields = fetched.fields;

        if self.sobject_type().is_empty() && !sobject_type.is_empty() {
            self.set_type(sobject_type);
        }
        if self.id().is_empty() && !id.is_empty() {
            self.set_id(id);
        }
    }

    fn attribute(&self, key: &str) -> &str {
        self.get(ATTRIBUTES_KEY)
            .and_then(|attrs| attrs.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for SObject {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}

/// Result of a create operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

/// Result of an upsert operation.
///
/// A 204 (existing record updated) carries no body; it is reported as
/// `success = true, created = false, id = None`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpsertResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub errors: Vec<SalesforceError>,
}

impl UpsertResult {
    pub(crate) fn updated() -> Self {
        Self {
            id: None,
            success: true,
            created: false,
            errors: Vec::new(),
        }
    }
}

/// Salesforce error in operation results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SalesforceError {
    #[serde(rename = "statusCode", alias = "errorCode")]
    pub status_code: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
