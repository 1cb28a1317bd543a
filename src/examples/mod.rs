//! Worked puzzle consumers of the two engines. Each module defines one
//! problem and wires it into the search or CSP machinery; the demo
//! binaries and benches reuse them.

pub mod circuit_board;
pub mod map_colouring;
pub mod maze;
pub mod missionaries;
pub mod queens;
pub mod send_more_money;
pub mod sudoku;
pub mod word_search;
