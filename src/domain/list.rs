use crate::{
    domain::{board::Board, card::Card, handle::BackendRef, sorting::sort_cards_by_priority},
    error::Result,
};
use serde::{Deserialize, Serialize};

/// An ordered column of cards within a board
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct List {
    pub id: String,
    pub board_id: String,
    pub name: String,
    /// Display position among the lists of the same board
    pub pos: f64,
    #[serde(skip)]
    backend: BackendRef,
}

impl List {
    const ENTITY: &'static str = "list";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_pos(mut self, pos: f64) -> Self {
        self.pos = pos;
        self
    }

    pub fn backend(&self) -> &BackendRef {
        &self.backend
    }

    pub fn set_backend(&mut self, backend: BackendRef) {
        self.backend = backend;
    }

    /// Loads the board this list belongs to
    pub async fn board(&self) -> Result<Board> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.get_board(&self.board_id).await
    }

    /// Cards of this list in priority order
    pub async fn cards(&self) -> Result<Vec<Card>> {
        let backend = self.backend.get(Self::ENTITY)?;
        let mut cards = backend.list_cards(&self.id).await?;
        sort_cards_by_priority(&mut cards);
        Ok(cards)
    }

    /// Renumbers the cards of this list so that `pos` follows priority order.
    ///
    /// One write per card. A failure part way through is returned as is and
    /// leaves the cards written so far renumbered.
    pub async fn sort(&self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        let cards = self.cards().await?;
        tracing::debug!(list_id = %self.id, cards = cards.len(), "renumbering cards");
        for (rank, mut card) in cards.into_iter().enumerate() {
            card.pos = rank as f64;
            backend.update_card(&mut card).await?;
        }
        Ok(())
    }

    /// Adds each card to this list, overwriting its `list_id`
    pub async fn add_cards(&self, cards: &mut [Card]) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        for card in cards.iter_mut() {
            card.list_id = self.id.clone();
            backend.add_card(card).await?;
        }
        Ok(())
    }

    pub async fn update(&mut self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.update_list(self).await
    }

    /// Deletes the list record; its cards are left in place
    pub async fn delete(&self) -> Result<()> {
        let backend = self.backend.get(Self::ENTITY)?;
        backend.delete_list(&self.id).await
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.board_id == other.board_id
            && self.name == other.name
            && self.pos == other.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::{BoardHandler, CardHandler, ListHandler},
        error::OrgaError,
        storage::SqliteBackend,
    };
    use async_trait::async_trait;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// Delegates to an in-memory backend, failing every `update_card` after
    /// the first `allowed` ones
    struct FlakyBackend {
        inner: Arc<SqliteBackend>,
        allowed: usize,
        updates: AtomicUsize,
    }

    #[async_trait]
    impl BoardHandler for FlakyBackend {
        async fn list_boards(&self) -> Result<Vec<Board>> {
            self.inner.list_boards().await
        }

        async fn get_board(&self, id: &str) -> Result<Board> {
            self.inner.get_board(id).await
        }

        async fn add_board(&self, board: &mut Board) -> Result<()> {
            self.inner.add_board(board).await
        }

        async fn update_board(&self, board: &mut Board) -> Result<()> {
            self.inner.update_board(board).await
        }

        async fn delete_board(&self, id: &str) -> Result<()> {
            self.inner.delete_board(id).await
        }
    }

    #[async_trait]
    impl ListHandler for FlakyBackend {
        async fn list_lists(&self, board_id: &str) -> Result<Vec<List>> {
            self.inner.list_lists(board_id).await
        }

        async fn get_list(&self, id: &str) -> Result<List> {
            self.inner.get_list(id).await
        }

        async fn add_list(&self, list: &mut List) -> Result<()> {
            self.inner.add_list(list).await
        }

        async fn update_list(&self, list: &mut List) -> Result<()> {
            self.inner.update_list(list).await
        }

        async fn delete_list(&self, id: &str) -> Result<()> {
            self.inner.delete_list(id).await
        }
    }

    #[async_trait]
    impl CardHandler for FlakyBackend {
        async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
            self.inner.list_cards(list_id).await
        }

        async fn get_card(&self, id: &str) -> Result<Card> {
            self.inner.get_card(id).await
        }

        async fn add_card(&self, card: &mut Card) -> Result<()> {
            self.inner.add_card(card).await
        }

        async fn update_card(&self, card: &mut Card) -> Result<()> {
            if self.updates.fetch_add(1, Ordering::SeqCst) >= self.allowed {
                return Err(OrgaError::LockPoisoned);
            }
            self.inner.update_card(card).await
        }

        async fn delete_card(&self, id: &str) -> Result<()> {
            self.inner.delete_card(id).await
        }
    }

    #[test]
    fn test_list_json_shape() {
        let mut list = List::new("Todo").with_pos(2.0);
        list.id = "l-1".to_string();
        list.board_id = "b-1".to_string();

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Id": "l-1", "BoardId": "b-1", "Name": "Todo", "Pos": 2.0})
        );
    }

    #[test]
    fn test_list_decodes_missing_fields_as_defaults() {
        let list: List = serde_json::from_str(r#"{"Id":"l-1","Name":"Todo"}"#).unwrap();
        assert_eq!(list.board_id, "");
        assert_eq!(list.pos, 0.0);
    }

    #[tokio::test]
    async fn test_detached_list_navigation_fails() {
        let mut list = List::new("Todo");

        assert!(matches!(
            list.board().await,
            Err(OrgaError::DetachedEntity("list"))
        ));
        assert!(matches!(
            list.cards().await,
            Err(OrgaError::DetachedEntity(_))
        ));
        assert!(matches!(list.sort().await, Err(OrgaError::DetachedEntity(_))));
        assert!(matches!(
            list.update().await,
            Err(OrgaError::DetachedEntity(_))
        ));
        assert!(matches!(
            list.delete().await,
            Err(OrgaError::DetachedEntity(_))
        ));
    }

    #[tokio::test]
    async fn test_sort_failure_keeps_cards_already_renumbered() {
        let inner = SqliteBackend::open_in_memory().unwrap();
        let mut list = List::new("Todo");
        inner.add_list(&mut list).await.unwrap();

        let mut cards = vec![
            Card::new("costly").with_priority(5, 3),
            Card::new("cheap").with_priority(5, 1),
            Card::new("valuable").with_priority(8, 9),
        ];
        for (card, pos) in cards.iter_mut().zip([10.0, 20.0, 30.0]) {
            card.pos = pos;
        }
        list.add_cards(&mut cards).await.unwrap();

        let flaky = Arc::new(FlakyBackend {
            inner: Arc::clone(&inner),
            allowed: 1,
            updates: AtomicUsize::new(0),
        });
        list.set_backend(BackendRef::from_arc(&flaky));

        let err = list.sort().await.unwrap_err();
        assert!(err.is_storage_fault());

        let stored = inner.list_cards(&list.id).await.unwrap();
        let pos_of = |name: &str| {
            stored
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.pos)
                .unwrap()
        };
        assert_eq!(pos_of("valuable"), 0.0);
        assert_eq!(pos_of("cheap"), 20.0);
        assert_eq!(pos_of("costly"), 10.0);
    }
}
