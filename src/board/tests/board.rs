//! Grid construction, square colors and line queries.

use super::at;
use crate::board::{Board, Color, Coord, CoordError, BOARD_SIZE};

#[test]
fn test_board_has_64_squares_32_per_color() {
    let board = Board::new();
    let total = board.squares().count();
    let black = board.squares().filter(|s| s.color() == Color::Black).count();
    let white = board.squares().filter(|s| s.color() == Color::White).count();

    assert_eq!(total, 64);
    assert_eq!(black, 32);
    assert_eq!(white, 32);
}

#[test]
fn test_get_square_returns_matching_coord() {
    let board = Board::new();
    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            let square = board.get_square(rank, file).unwrap();
            assert_eq!(square.coord().rank(), rank);
            assert_eq!(square.coord().file(), file);
            assert!(square.is_empty());
        }
    }
}

#[test]
fn test_get_square_out_of_bounds() {
    let board = Board::new();
    assert_eq!(
        board.get_square(8, 0),
        Err(CoordError::RankOutOfBounds { rank: 8 })
    );
    assert_eq!(
        board.get_square(0, 11),
        Err(CoordError::FileOutOfBounds { file: 11 })
    );
}

#[test]
fn test_coord_construction_bounds() {
    assert!(Coord::new(0, 0).is_some());
    assert!(Coord::new(7, 7).is_some());
    assert!(Coord::new(8, 0).is_none());
    assert!(Coord::new(0, 8).is_none());
    assert_eq!(
        Coord::try_from((9, 1)),
        Err(CoordError::RankOutOfBounds { rank: 9 })
    );
}

#[test]
fn test_a1_is_dark_and_colors_alternate() {
    let board = Board::new();
    assert_eq!(board.square(at(0, 0)).color(), Color::Black);

    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            let color = board.square(at(rank, file)).color();
            if file + 1 < BOARD_SIZE {
                assert_ne!(color, board.square(at(rank, file + 1)).color());
            }
            if rank + 1 < BOARD_SIZE {
                assert_ne!(color, board.square(at(rank + 1, file)).color());
            }
        }
    }
}

#[test]
fn test_rank_squares_ascending_file_order() {
    let board = Board::new();
    for rank in 0..BOARD_SIZE {
        let line = board.rank_squares(rank).unwrap();
        assert_eq!(line.len(), 8);
        for (file, square) in line.iter().enumerate() {
            assert_eq!(square.coord(), at(rank, file));
        }
    }
    assert!(board.rank_squares(8).is_err());
}

#[test]
fn test_file_squares_ascending_rank_order() {
    let board = Board::new();
    for file in 0..BOARD_SIZE {
        let line: Vec<_> = board.file_squares(file).unwrap().collect();
        assert_eq!(line.len(), 8);
        for (rank, square) in line.iter().enumerate() {
            assert_eq!(square.coord(), at(rank, file));
        }
    }
    assert!(board.file_squares(9).is_err());
}

#[test]
fn test_notation_parsing() {
    assert_eq!("A1".parse::<Coord>().unwrap(), at(0, 0));
    assert_eq!("d2".parse::<Coord>().unwrap(), at(1, 3));
    assert_eq!("H8".parse::<Coord>().unwrap(), at(7, 7));

    for bad in ["", "D", "D22", "I3", "A9", "A0", "3D", "  "] {
        assert!(matches!(
            bad.parse::<Coord>(),
            Err(CoordError::InvalidNotation { .. })
        ));
    }
}

#[test]
fn test_notation_display_roundtrip() {
    let coord = at(1, 3);
    assert_eq!(coord.to_string(), "D2");
    assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
}

#[test]
fn test_two_boards_are_independent() {
    let mut a = Board::new();
    let b = Board::new();
    let id = a.add_piece(crate::board::PieceKind::Rook, Color::White);
    a.put_piece(at(3, 3), id);

    assert!(a.piece_at(at(3, 3)).is_some());
    assert!(b.piece_at(at(3, 3)).is_none());
}

#[test]
fn test_locate_follows_occupancy() {
    let mut board = Board::new();
    let id = board.add_piece(crate::board::PieceKind::Knight, Color::Black);
    assert_eq!(board.locate(id), None);

    board.put_piece(at(4, 3), id);
    assert_eq!(board.locate(id), Some(at(4, 3)));

    board.take_piece(at(4, 3));
    assert_eq!(board.locate(id), None);
}
