//! The employee record.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use roster_core::document::Document;

/// A single employee record, as exchanged on the wire and persisted in the
/// store.
///
/// The identifier is the hex form of the store-assigned object id and is
/// absent until the store assigns one; serialization omits it in that case.
/// Decoding tolerates missing fields, which take their zero values, but
/// rejects fields of the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl Document for Employee {
    fn id(&self) -> Option<ObjectId> {
        self.id
            .as_deref()
            .and_then(|id| ObjectId::parse_str(id).ok())
    }

    fn with_id(self, id: ObjectId) -> Self {
        Self { id: Some(id.to_hex()), ..self }
    }

    fn collection_name() -> &'static str {
        "employees"
    }
}
