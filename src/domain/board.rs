use crate::{
    domain::{handle::BackendRef, list::List, sorting::sort_lists_by_pos},
    error::Result,
};
use serde::{Deserialize, Serialize};

/// Top-level kanban workspace; owns lists through `List::board_id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    backend: BackendRef,
}

impl Board {
    const ENTITY: &'static str = "board";

    /// Creates a detached board; the ID is assigned when it is added
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn backend(&self) -> &BackendRef {
        &self.backend
    }

    pub fn set_backend(&mut self, backend: BackendRef) {
        self.backend = backend;
    }

    /// Lists of this board, ordered by position
    pub async fn lists(&self) -> Result<Vec<List>> {
        let backend = self.backend.get(Self::ENTITY)?;
        let mut lists = backend.list_lists(&self.id).await?;
        sort_lists_by_pos(&mut lists);
        Ok(lists)
    }

    /// Adds each list under this board, overwriting its `board_id`.
    ///
    /// Stops at the first failure; lists added before it stay persisted.
    pub async fn add_lists(&self, lists: &mut [List]) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        for list in lists.iter_mut() {
            list.board_id = self.id.clone();
            backend.add_list(list).await?;
        }
        Ok(())
    }

    pub async fn update(&mut self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.update_board(self).await
    }

    /// Deletes the board record; its lists are left in place
    pub async fn delete(&self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.delete_board(&self.id).await
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}
