//! SQLite-backed implementation of the [`Backend`](crate::backend::Backend)
//! capability set.
//!
//! One database file holds three namespaces (`board`, `list`, `card`), each
//! a table of JSON records keyed by generated IDs.

use crate::{
    backend::{BoardHandler, CardHandler, ListHandler},
    domain::{BackendRef, Board, Card, List},
    error::{OrgaError, Result},
};
use async_trait::async_trait;
use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Arc, Mutex, Weak},
};
use tokio::fs;

pub mod board;
pub mod card;
pub mod list;
pub mod record_store;

pub use board::BoardStore;
pub use card::CardStore;
pub use list::ListStore;
pub use record_store::RecordStore;

/// The backend facade: composes the three handlers and stamps a handle to
/// itself onto every entity that passes through it.
///
/// Always lives behind an `Arc`; the database connection is released when
/// the last strong reference drops.
pub struct SqliteBackend {
    boards: BoardStore,
    lists: ListStore,
    cards: CardStore,
    this: Weak<SqliteBackend>,
}

impl SqliteBackend {
    /// Opens (or creates) the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Arc<Self>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await.map_err(|source| {
                    tracing::error!(
                        path = %parent.display(),
                        error = %source,
                        "failed to create database directory"
                    );
                    OrgaError::StorageUnavailable {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        let conn = Connection::open(path).map_err(|err| {
            tracing::error!(path = %path.display(), error = %err, "failed to open database");
            err
        })?;
        tracing::info!(path = %path.display(), "opened database");
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> Result<Arc<Self>> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    /// Builds the facade over an existing connection, creating any missing
    /// namespaces
    pub fn with_connection(conn: Connection) -> Result<Arc<Self>> {
        let conn = Arc::new(Mutex::new(conn));
        let boards = BoardStore::new(Arc::clone(&conn))?;
        let lists = ListStore::new(Arc::clone(&conn))?;
        let cards = CardStore::new(conn)?;

        Ok(Arc::new_cyclic(|this| Self {
            boards,
            lists,
            cards,
            this: this.clone(),
        }))
    }

    /// A non-owning handle to this backend
    pub fn handle(&self) -> BackendRef {
        BackendRef::new(self.this.clone())
    }
}

#[async_trait]
impl BoardHandler for SqliteBackend {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        let mut boards = self.boards.list_boards().await?;
        for board in boards.iter_mut() {
            board.set_backend(self.handle());
        }
        Ok(boards)
    }

    async fn get_board(&self, id: &str) -> Result<Board> {
        let mut board = self.boards.get_board(id).await?;
        board.set_backend(self.handle());
        Ok(board)
    }

    async fn add_board(&self, board: &mut Board) -> Result<()> {
        board.set_backend(self.handle());
        self.boards.add_board(board).await
    }

    async fn update_board(&self, board: &mut Board) -> Result<()> {
        board.set_backend(self.handle());
        self.boards.update_board(board).await
    }

    async fn delete_board(&self, id: &str) -> Result<()> {
        self.boards.delete_board(id).await
    }
}

#[async_trait]
impl ListHandler for SqliteBackend {
    async fn list_lists(&self, board_id: &str) -> Result<Vec<List>> {
        let mut lists = self.lists.list_lists(board_id).await?;
        for list in lists.iter_mut() {
            list.set_backend(self.handle());
        }
        Ok(lists)
    }

    async fn get_list(&self, id: &str) -> Result<List> {
        let mut list = self.lists.get_list(id).await?;
        list.set_backend(self.handle());
        Ok(list)
    }

    async fn add_list(&self, list: &mut List) -> Result<()> {
        list.set_backend(self.handle());
        self.lists.add_list(list).await
    }

    async fn update_list(&self, list: &mut List) -> Result<()> {
        list.set_backend(self.handle());
        self.lists.update_list(list).await
    }

    async fn delete_list(&self, id: &str) -> Result<()> {
        self.lists.delete_list(id).await
    }
}

#[async_trait]
impl CardHandler for SqliteBackend {
    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        let mut cards = self.cards.list_cards(list_id).await?;
        for card in cards.iter_mut() {
            card.set_backend(self.handle());
        }
        Ok(cards)
    }

    async fn get_card(&self, id: &str) -> Result<Card> {
        let mut card = self.cards.get_card(id).await?;
        card.set_backend(self.handle());
        Ok(card)
    }

    async fn add_card(&self, card: &mut Card) -> Result<()> {
        card.set_backend(self.handle());
        self.cards.add_card(card).await
    }

    async fn update_card(&self, card: &mut Card) -> Result<()> {
        card.set_backend(self.handle());
        self.cards.update_card(card).await
    }

    async fn delete_card(&self, id: &str) -> Result<()> {
        self.cards.delete_card(id).await
    }
}
