use crate::{
    backend::ListHandler,
    domain::List,
    error::Result,
    storage::record_store::{ensure_finite, RecordStore},
};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// List handler backed by the `list` namespace
#[derive(Clone)]
pub struct ListStore {
    records: RecordStore,
}

impl ListStore {
    pub const NAMESPACE: &'static str = "list";

    pub fn new(conn: Arc<Mutex<Connection>>) -> Result<Self> {
        let records = RecordStore::new(Self::NAMESPACE, conn);
        records.init()?;
        Ok(Self { records })
    }
}

#[async_trait]
impl ListHandler for ListStore {
    async fn list_lists(&self, board_id: &str) -> Result<Vec<List>> {
        self.records.scan(|list: &List| list.board_id == board_id)
    }

    async fn get_list(&self, id: &str) -> Result<List> {
        self.records.get(id)
    }

    async fn add_list(&self, list: &mut List) -> Result<()> {
        ensure_finite("Pos", list.pos)?;
        list.id = Uuid::new_v4().to_string();
        tracing::debug!(list_id = %list.id, board_id = %list.board_id, "adding list");
        self.records.set(&list.id, &*list)
    }

    async fn update_list(&self, list: &mut List) -> Result<()> {
        ensure_finite("Pos", list.pos)?;
        self.records.get::<List>(&list.id)?;
        self.records.set(&list.id, &*list)
    }

    async fn delete_list(&self, id: &str) -> Result<()> {
        tracing::debug!(list_id = id, "deleting list");
        self.records.delete(id)
    }
}
