//! Core traits and types for document representation and serialization.
//!
//! This module provides the fundamental traits that all stored documents must implement,
//! as well as utilities for converting documents between their wire shape and the
//! fields shape that crosses the backend boundary.

use bson::{Bson, de::deserialize_from_bson, oid::ObjectId, ser::serialize_to_bson};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::{StoreError, StoreResult};

/// Name of the field carrying a document's identifier on its wire shape.
///
/// The field is stripped before a document crosses the backend boundary;
/// each backend owns the mapping to its native identifier representation.
pub const ID_FIELD: &str = "id";

/// Core trait that all documents stored in a document store must implement.
///
/// This trait defines the minimal interface required for a type to be used as a
/// document. Identifiers are assigned by the store on insertion, so a document
/// has none until it has been persisted.
///
/// # Example
///
/// ```ignore
/// use roster_core::document::Document;
/// use bson::oid::ObjectId;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Badge {
///     pub id: Option<String>,
///     pub label: String,
/// }
///
/// impl Document for Badge {
///     fn id(&self) -> Option<ObjectId> {
///         self.id.as_deref().and_then(|id| ObjectId::parse_str(id).ok())
///     }
///
///     fn with_id(self, id: ObjectId) -> Self {
///         Self { id: Some(id.to_hex()), ..self }
///     }
///
///     fn collection_name() -> &'static str {
///         "badges"
///     }
/// }
/// ```
pub trait Document: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns this document's store-assigned identifier, if it has one.
    fn id(&self) -> Option<ObjectId>;

    /// Returns this document carrying the given store-assigned identifier.
    fn with_id(self, id: ObjectId) -> Self;

    /// Returns the name of the collection this document belongs to.
    ///
    /// This should be a static, lowercase identifier (e.g., "employees").
    /// The collection will be automatically created if it doesn't exist.
    fn collection_name() -> &'static str;
}

/// Extension trait providing serialization/deserialization utilities for documents.
///
/// This trait is automatically implemented for all types that implement [`Document`].
pub trait DocumentExt: Document {
    /// Converts this document to a BSON fields document for storage, with the
    /// identifier field stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the document does not
    /// serialize to a BSON document.
    fn to_fields(&self) -> StoreResult<Bson>;

    /// Rebuilds a document from its stored fields and identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_fields(id: ObjectId, fields: Bson) -> StoreResult<Self>;

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> StoreResult<Value>;

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> StoreResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn to_fields(&self) -> StoreResult<Bson> {
        let mut fields = serialize_to_bson(self)?
            .as_document()
            .cloned()
            .ok_or_else(|| StoreError::InvalidDocument("Expected document".into()))?;
        fields.remove(ID_FIELD);

        Ok(Bson::Document(fields))
    }

    fn from_fields(id: ObjectId, fields: Bson) -> StoreResult<Self> {
        Ok(deserialize_from_bson::<Self>(fields)?.with_id(id))
    }

    fn to_json(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> StoreResult<Self> {
        Ok(from_value(value)?)
    }
}
