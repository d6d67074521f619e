#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(
    clippy::nursery,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::module_name_repetitions)]

pub mod line_score;
pub mod schedule;
pub mod teams;
mod util;

pub use line_score::entities::{BoxScore, InningScore, TeamLineScore, UNKNOWN_TEAM};
pub use line_score::parser::{parse, ParseError};
pub use teams::{ResolveName, TeamNameTable, CPBL_TEAMS};
