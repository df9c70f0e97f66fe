pub mod score_sheet;
pub mod series;


pub use score_sheet::{player_of, Cumulative, Row, ScoreSheet, Summary};
pub use series::{Series, SeriesHandle};
