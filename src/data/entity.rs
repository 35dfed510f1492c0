use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// Serialize a UUID as its hyphenated string form so identity filters compare
/// against a plain string field.
pub mod uuid_as_string {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Bookkeeping fields carried by soft-deletable documents
///
/// `date_created` is written once, at insert time, and never changes after.
/// `date_updated` moves on every mutating operation. `is_deleted` is flipped
/// by delete operations only; reads do not filter on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracking {
    #[serde(with = "uuid_as_string")]
    pub id: Uuid,

    pub is_deleted: bool,

    pub date_created: DateTime<Utc>,

    pub date_updated: DateTime<Utc>,
}

impl Tracking {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            is_deleted: false,
            date_created: now,
            date_updated: now,
        }
    }
}

impl Default for Tracking {
    fn default() -> Self {
        Self::new()
    }
}

/// A document type stored in the database
///
/// Types that embed [`Tracking`] (usually via `#[serde(flatten)]`) override
/// the accessors and get soft-delete and timestamp stamping; types that leave
/// the defaults are hard-deletable and are stored exactly as serialized.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Physical collection this type is stored in
    fn collection_name() -> &'static str;

    fn tracking(&self) -> Option<&Tracking> {
        None
    }

    fn tracking_mut(&mut self) -> Option<&mut Tracking> {
        None
    }
}
