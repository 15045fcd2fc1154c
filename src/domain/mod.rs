pub mod board;
pub mod card;
pub mod handle;
pub mod list;
pub mod sorting;

pub use board::Board;
pub use card::{Card, Label};
pub use handle::BackendRef;
pub use list::List;
pub use sorting::{compare_priority, has_higher_priority};
