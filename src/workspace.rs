//! Startup policies layered over the backend.
//!
//! A board that does not exist yet is created, and an empty board is seeded
//! with the configured default lists. Neither is a property of the storage
//! layer itself.

use crate::{
    backend::BoardHandler,
    config::Config,
    domain::{Board, List},
    error::Result,
    storage::SqliteBackend,
};
use std::sync::Arc;

/// Returns the first board named `name`, creating it when none exists
pub async fn open_board<B>(backend: &B, name: &str) -> Result<Board>
where
    B: BoardHandler + ?Sized,
{
    let boards = backend.list_boards().await?;
    if let Some(board) = boards.into_iter().find(|b| b.name == name) {
        tracing::debug!(board_id = %board.id, name, "found board");
        return Ok(board);
    }

    let mut board = Board::new(name);
    backend.add_board(&mut board).await?;
    tracing::info!(board_id = %board.id, name, "created board");
    Ok(board)
}

/// Adds one list per name (positions 0, 1, ...) if the board has no lists.
///
/// Returns the board's lists ordered by position either way.
pub async fn ensure_default_lists(board: &Board, names: &[String]) -> Result<Vec<List>> {
    let lists = board.lists().await?;
    if !lists.is_empty() {
        return Ok(lists);
    }

    let mut defaults: Vec<List> = names
        .iter()
        .enumerate()
        .map(|(pos, name)| List::new(name.as_str()).with_pos(pos as f64))
        .collect();
    board.add_lists(&mut defaults).await?;
    tracing::info!(board_id = %board.id, lists = defaults.len(), "seeded default lists");

    board.lists().await
}

/// Opens the configured database and the configured board, seeding it on
/// first use
pub async fn bootstrap(config: &Config) -> Result<(Arc<SqliteBackend>, Board)> {
    let backend = SqliteBackend::open(&config.database_path).await?;
    let board = open_board(&*backend, &config.board_name).await?;
    ensure_default_lists(&board, &config.default_lists).await?;
    Ok((backend, board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ListHandler;
    use tempfile::TempDir;

    fn names(lists: &[List]) -> Vec<&str> {
        lists.iter().map(|l| l.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_open_board_creates_then_reuses() {
        let backend = SqliteBackend::open_in_memory().unwrap();

        let created = open_board(&*backend, "Main Board").await.unwrap();
        let reopened = open_board(&*backend, "Main Board").await.unwrap();

        assert_eq!(created.id, reopened.id);
        assert!(reopened.backend().is_attached());
        assert_eq!(backend.list_boards().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_default_lists_seeded_once() {
        let backend = SqliteBackend::open_in_memory().unwrap();
        let board = open_board(&*backend, "Main Board").await.unwrap();
        let defaults = vec!["Todo".to_string(), "Done".to_string()];

        let lists = ensure_default_lists(&board, &defaults).await.unwrap();
        assert_eq!(names(&lists), vec!["Todo", "Done"]);
        assert_eq!(lists[1].pos, 1.0);

        let again = ensure_default_lists(&board, &defaults).await.unwrap();
        assert_eq!(again.len(), 2);
        assert_eq!(backend.list_lists(&board.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_bootstrap_uses_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            database_path: temp_dir.path().join("orga.db"),
            board_name: "Work".to_string(),
            default_lists: vec!["Backlog".to_string()],
        };

        let (_backend, board) = bootstrap(&config).await.unwrap();

        assert_eq!(board.name, "Work");
        assert_eq!(names(&board.lists().await.unwrap()), vec!["Backlog"]);
        assert!(config.database_path.exists());
    }
}
