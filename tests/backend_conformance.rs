//! End-to-end walk over the `Backend` contract: add, list, get, update,
//! move a card between lists, and delete.

use orga_core::{Backend, Board, BoardHandler, Card, CardHandler, List, ListHandler, SqliteBackend};
use tempfile::TempDir;

fn find_id<'a, I>(items: I, name: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    items
        .into_iter()
        .find(|(item_name, _)| *item_name == name)
        .map(|(_, id)| id.to_string())
        .unwrap_or_else(|| panic!("no item named {}", name))
}

async fn exercise_backend(b: &dyn Backend) {
    let board_name = "Board-conformance";
    let mut board = Board::new(board_name);
    b.add_board(&mut board).await.expect("add board");
    let boards = b.list_boards().await.expect("list boards");
    let board_id = find_id(boards.iter().map(|x| (x.name.as_str(), x.id.as_str())), board_name);
    let mut board = b.get_board(&board_id).await.expect("get board");

    let list_name = "List-conformance";
    board
        .add_lists(&mut [List::new(list_name)])
        .await
        .expect("add list");
    let lists = board.lists().await.expect("list lists");
    let list_id = find_id(lists.iter().map(|x| (x.name.as_str(), x.id.as_str())), list_name);
    let mut list = b.get_list(&list_id).await.expect("get list");

    let card_name = "Card-conformance";
    list.add_cards(&mut [Card::new(card_name)])
        .await
        .expect("add card");
    let cards = list.cards().await.expect("list cards");
    let card_id = find_id(cards.iter().map(|x| (x.name.as_str(), x.id.as_str())), card_name);
    let mut card = b.get_card(&card_id).await.expect("get card");

    card.name = format!("{}-new", card_name);
    b.update_card(&mut card).await.expect("update card");
    assert_eq!(b.get_card(&card_id).await.expect("get card").name, card.name);

    list.name = format!("{}-new", list_name);
    b.update_list(&mut list).await.expect("update list");
    assert_eq!(b.get_list(&list_id).await.expect("get list").name, list.name);

    board.name = format!("{}-new", board_name);
    b.update_board(&mut board).await.expect("update board");
    assert_eq!(b.get_board(&board_id).await.expect("get board").name, board.name);

    let list2_name = format!("{}-2", list_name);
    board
        .add_lists(&mut [List::new(list2_name.as_str())])
        .await
        .expect("add list2");
    let lists = board.lists().await.expect("list lists");
    let list2_id = find_id(lists.iter().map(|x| (x.name.as_str(), x.id.as_str())), &list2_name);

    card.list_id = list2_id.clone();
    card.update().await.expect("move card");
    let cards = b.list_cards(&list2_id).await.expect("list cards");
    find_id(cards.iter().map(|x| (x.name.as_str(), x.id.as_str())), &card.name);
    let cards = list.cards().await.expect("list cards");
    assert!(cards.iter().all(|c| c.name != card.name));
    assert_eq!(card.list().await.expect("card list").id, list2_id);

    b.delete_card(&card_id).await.expect("delete card");
    b.delete_list(&list_id).await.expect("delete list");
    b.delete_list(&list2_id).await.expect("delete list2");
    b.delete_board(&board_id).await.expect("delete board");

    assert!(b.get_board(&board_id).await.unwrap_err().is_not_found());
    assert!(b.list_lists(&board_id).await.expect("list lists").is_empty());
}

#[tokio::test]
async fn test_sqlite_backend_in_memory() {
    let backend = SqliteBackend::open_in_memory().expect("open in memory");
    exercise_backend(&*backend).await;
}

#[tokio::test]
async fn test_sqlite_backend_on_disk() {
    let temp_dir = TempDir::new().expect("temp dir");
    let backend = SqliteBackend::open(temp_dir.path().join("test_db"))
        .await
        .expect("open file");
    exercise_backend(&*backend).await;
}
