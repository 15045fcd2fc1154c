use crate::{
    backend::CardHandler,
    domain::Card,
    error::Result,
    storage::record_store::{ensure_finite, RecordStore},
};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Card handler backed by the `card` namespace
#[derive(Clone)]
pub struct CardStore {
    records: RecordStore,
}

impl CardStore {
    pub const NAMESPACE: &'static str = "card";

    pub fn new(conn: Arc<Mutex<Connection>>) -> Result<Self> {
        let records = RecordStore::new(Self::NAMESPACE, conn);
        records.init()?;
        Ok(Self { records })
    }
}

#[async_trait]
impl CardHandler for CardStore {
    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        self.records.scan(|card: &Card| card.list_id == list_id)
    }

    async fn get_card(&self, id: &str) -> Result<Card> {
        self.records.get(id)
    }

    async fn add_card(&self, card: &mut Card) -> Result<()> {
        ensure_finite("Pos", card.pos)?;
        card.id = Uuid::new_v4().to_string();
        tracing::debug!(card_id = %card.id, list_id = %card.list_id, "adding card");
        self.records.set(&card.id, &*card)
    }

    async fn update_card(&self, card: &mut Card) -> Result<()> {
        ensure_finite("Pos", card.pos)?;
        self.records.get::<Card>(&card.id)?;
        self.records.set(&card.id, &*card)
    }

    async fn delete_card(&self, id: &str) -> Result<()> {
        tracing::debug!(card_id = id, "deleting card");
        self.records.delete(id)
    }
}
