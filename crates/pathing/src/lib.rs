//! Best-probability path search for a single mover on a stochastic board.
//!
//! Given a [`board_core::BoardView`], a [`board_core::RiskTable`] and a
//! [`SearchRequest`], [`PathFinder::search`] returns every square the mover can
//! reach together with the route that maximises the chance of arriving safely,
//! spending rerolls and skills where they help most.
//!
//! The search is a label-correcting best-first search: each label carries its
//! own reroll and skill consumption, so competing partial paths never share
//! mutable state and the call is fully re-entrant.
//!
//! ```
//! use board_core::{BoardBuilder, BoardConfig, MovementBudget, RiskTable, Square};
//! use pathing::{PathFinder, SearchRequest};
//!
//! let board = BoardBuilder::new(5, 5).with_enemy((2, 2)).build().unwrap();
//! let table = RiskTable::default();
//! let finder = PathFinder::new(&board, &table, BoardConfig::default());
//!
//! let request = SearchRequest::new(Square::new(0, 0), MovementBudget::new(4, 2, 1));
//! let result = finder.search(&request).unwrap();
//! assert_eq!(result.probability(Square::new(0, 0)).map(|p| p.value()), Some(1.0));
//! ```
pub mod error;
pub mod request;
pub mod result;
pub mod search;

pub use error::{InvalidInput, SearchError};
pub use request::SearchRequest;
pub use result::{PathRecord, PathStep, RerollSource, RolledCheck, SearchResult, SearchStats};
pub use search::PathFinder;
