mod common;
mod event;
mod match_detail;
mod matchlist;
mod player;
mod team;

pub use common::*;
pub use event::*;
pub use match_detail::*;
pub use matchlist::*;
pub use player::*;
pub use team::*;
