pub mod bookmarks;
pub mod handle;
pub mod move_log;
pub mod projection;

#[cfg(test)]
mod tests_move_log;
#[cfg(test)]
mod tests_projection;

pub use bookmarks::Bookmarks;
pub use handle::GameHandle;
pub use move_log::{parse_moves, split_games, MoveLog, ParsedLog};
pub use projection::Game;
