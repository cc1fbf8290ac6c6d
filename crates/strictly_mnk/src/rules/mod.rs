//! Game rules for m,n,k games.
//!
//! Pure functions over a board snapshot. Rules never look at the move log,
//! so they can be evaluated for any step the cursor points at.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningRun, WinningRuns, check_win, measure_run};
