use crate::{
    backend::BoardHandler,
    domain::Board,
    error::Result,
    storage::record_store::RecordStore,
};
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Board handler backed by the `board` namespace
#[derive(Clone)]
pub struct BoardStore {
    records: RecordStore,
}

impl BoardStore {
    pub const NAMESPACE: &'static str = "board";

    /// Wraps the connection and makes sure the namespace exists
    pub fn new(conn: Arc<Mutex<Connection>>) -> Result<Self> {
        let records = RecordStore::new(Self::NAMESPACE, conn);
        records.init()?;
        Ok(Self { records })
    }
}

#[async_trait]
impl BoardHandler for BoardStore {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        self.records.scan(|_: &Board| true)
    }

    async fn get_board(&self, id: &str) -> Result<Board> {
        self.records.get(id)
    }

    async fn add_board(&self, board: &mut Board) -> Result<()> {
        board.id = Uuid::new_v4().to_string();
        tracing::debug!(board_id = %board.id, name = %board.name, "adding board");
        self.records.set(&board.id, &*board)
    }

    async fn update_board(&self, board: &mut Board) -> Result<()> {
        self.records.get::<Board>(&board.id)?;
        self.records.set(&board.id, &*board)
    }

    async fn delete_board(&self, id: &str) -> Result<()> {
        tracing::debug!(board_id = id, "deleting board");
        self.records.delete(id)
    }
}
