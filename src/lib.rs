//! Crate root module declarations for the Quince Chess engine.
//!
//! This file exposes all top-level subsystems (board representation, move
//! validation, move enumeration, search, and utility helpers) so the driver
//! binary, tests, and benchmarks can import stable module paths.

pub mod board {
    pub mod board_location;
    pub mod chessboard;
    pub mod piece_class;
    pub mod piece_record;
    pub mod piece_team;
}

pub mod chess_errors;
pub mod chess_move;
pub mod move_list;

pub mod move_validation {
    pub mod validate_bishop;
    pub mod validate_king;
    pub mod validate_knight;
    pub mod validate_pawn;
    pub mod validate_queen;
    pub mod validate_rook;
    pub mod validator;
}

pub mod move_enumeration {
    pub mod enumerate_bishop;
    pub mod enumerate_king;
    pub mod enumerate_knight;
    pub mod enumerate_pawn;
    pub mod enumerate_queen;
    pub mod enumerate_rook;
    pub mod enumerator;
    pub mod slider_rays;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
    pub mod random_move;
}

pub mod utils {
    pub mod render_board;
}
