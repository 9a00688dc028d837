//! Subcommands of the `noughts` binary

pub mod best_move;
pub mod evaluate;
pub mod play;
pub mod self_play;
