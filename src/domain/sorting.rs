use crate::domain::{card::Card, list::List};
use std::cmp::Ordering;

/// Compares two cards by priority.
///
/// A strictly higher `value` ranks first. On equal `value`, a strictly lower
/// `effort` ranks first. Cards equal in both fields compare `Equal`.
pub fn compare_priority(a: &Card, b: &Card) -> Ordering {
    b.value.cmp(&a.value).then_with(|| a.effort.cmp(&b.effort))
}

/// True when `a` ranks strictly before `b` in priority order
pub fn has_higher_priority(a: &Card, b: &Card) -> bool {
    compare_priority(a, b) == Ordering::Less
}

/// Sorts cards in-place by priority.
///
/// The sort is stable, so cards tied on both value and effort keep the
/// order they were read in.
///
/// # Examples
/// ```
/// use orga_core::domain::{sorting::sort_cards_by_priority, Card};
///
/// let mut cards = vec![
///     Card::new("costly").with_priority(5, 3),
///     Card::new("cheap").with_priority(5, 1),
///     Card::new("valuable").with_priority(8, 9),
/// ];
///
/// sort_cards_by_priority(&mut cards);
/// assert_eq!(cards[0].name, "valuable");
/// assert_eq!(cards[1].name, "cheap");
/// ```
pub fn sort_cards_by_priority(cards: &mut [Card]) {
    cards.sort_by(compare_priority);
}

/// Sorts cards in-place by ascending `pos`, stable on ties
pub fn sort_cards_by_pos(cards: &mut [Card]) {
    cards.sort_by(|a, b| a.pos.total_cmp(&b.pos));
}

/// Sorts lists in-place by ascending `pos`, stable on ties
pub fn sort_lists_by_pos(lists: &mut [List]) {
    lists.sort_by(|a, b| a.pos.total_cmp(&b.pos));
}
