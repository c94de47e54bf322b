//! Implementations of the `shikaku` subcommands.

pub use self::{check::*, generate::*, solve::*};

mod check;
mod generate;
mod solve;
