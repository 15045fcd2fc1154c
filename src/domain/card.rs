use crate::{
    domain::{handle::BackendRef, list::List, sorting},
    error::Result,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A colored tag embedded in a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    pub color: String,
    pub name: String,
}

impl Label {
    pub fn new(color: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            name: name.into(),
        }
    }
}

/// A unit of work; `value` and `effort` drive its priority
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Card {
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub description: String,
    pub value: i64,
    pub effort: i64,
    pub work: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,
    /// Display position within the list, rewritten by `List::sort`
    pub pos: f64,
    pub last_update: DateTime<Utc>,
    #[serde(skip)]
    backend: BackendRef,
}

// Records written with a nil label slice carry `"Labels": null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Label>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Label>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Card {
    const ENTITY: &'static str = "card";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_update: Utc::now(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, value: i64, effort: i64) -> Self {
        self.value = value;
        self.effort = effort;
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Stamps `last_update` with the current time
    pub fn touch(&mut self) {
        self.last_update = Utc::now();
    }

    /// True when this card ranks strictly before `other`
    pub fn has_higher_priority(&self, other: &Card) -> bool {
        sorting::has_higher_priority(self, other)
    }

    pub fn backend(&self) -> &BackendRef {
        &self.backend
    }

    pub fn set_backend(&mut self, backend: BackendRef) {
        self.backend = backend;
    }

    /// Loads the list this card belongs to
    pub async fn list(&self) -> Result<List> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.get_list(&self.list_id).await
    }

    pub async fn update(&mut self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.update_card(self).await
    }

    pub async fn delete(&self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.delete_card(&self.id).await
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.list_id == other.list_id
            && self.name == other.name
            && self.description == other.description
            && self.value == other.value
            && self.effort == other.effort
            && self.work == other.work
            && self.labels == other.labels
            && self.pos == other.pos
            && self.last_update == other.last_update
    }
}
