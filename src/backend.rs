//! Capability traits every storage engine implements.
//!
//! Each entity type has its own handler trait. [`Backend`] is the union of
//! the three and is what entities hold a handle to for navigation.

use crate::{
    domain::{Board, Card, List},
    error::Result,
};
use async_trait::async_trait;

/// CRUD over boards
#[async_trait]
pub trait BoardHandler: Send + Sync {
    /// Lists every stored board
    async fn list_boards(&self) -> Result<Vec<Board>>;

    /// Loads a board by ID
    async fn get_board(&self, id: &str) -> Result<Board>;

    /// Persists a new board, assigning it a fresh ID
    async fn add_board(&self, board: &mut Board) -> Result<()>;

    /// Overwrites an existing board; fails with `NotFound` if it was never added
    async fn update_board(&self, board: &mut Board) -> Result<()>;

    /// Removes a board without touching its lists
    async fn delete_board(&self, id: &str) -> Result<()>;
}

/// CRUD over lists, scoped by board
#[async_trait]
pub trait ListHandler: Send + Sync {
    /// Lists the lists whose `board_id` equals `board_id`, in store order
    async fn list_lists(&self, board_id: &str) -> Result<Vec<List>>;

    async fn get_list(&self, id: &str) -> Result<List>;

    async fn add_list(&self, list: &mut List) -> Result<()>;

    async fn update_list(&self, list: &mut List) -> Result<()>;

    /// Removes a list without touching its cards
    async fn delete_list(&self, id: &str) -> Result<()>;
}

/// CRUD over cards, scoped by list
#[async_trait]
pub trait CardHandler: Send + Sync {
    /// Lists the cards whose `list_id` equals `list_id`, in store order
    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>>;

    async fn get_card(&self, id: &str) -> Result<Card>;

    async fn add_card(&self, card: &mut Card) -> Result<()>;

    async fn update_card(&self, card: &mut Card) -> Result<()>;

    async fn delete_card(&self, id: &str) -> Result<()>;
}

/// The full capability set consumed by the UI and by entity navigation.
pub trait Backend: BoardHandler + ListHandler + CardHandler {}

impl<T> Backend for T where T: BoardHandler + ListHandler + CardHandler + ?Sized {}
