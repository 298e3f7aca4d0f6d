//! The game authority and everything it reports.
//!
//! - [`Game`]: roster, current number, draw loop
//! - [`GameHandle`]: the process-wide handle onto the authority
//! - [`DrawSource`]: where numbers come from
//! - [`Winner`], [`Registration`], [`DrawOutcome`], [`Phase`]: outcomes

mod authority;
mod draws;
mod handle;
mod result;

pub use authority::Game;
pub use draws::{DrawSource, RandomDraws, ScriptedDraws};
pub use handle::GameHandle;
pub use result::{DrawOutcome, Phase, Registration, Winner};
