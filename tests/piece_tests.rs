use tetramino::core::{Block, Field, Piece};
use tetramino::types::{Position, RotationAngle, ShapeKind, GRID_COLS};

fn spawn(shape: ShapeKind, field: &Field) -> Piece {
    Piece::spawn(shape, field, 0).expect("spawn on open field")
}

fn lock(field: &mut Field, piece: Piece) {
    field.lock(&piece.into_blocks());
}

#[test]
fn test_every_shape_spawns_four_cells_in_bounds() {
    let field = Field::new();
    for shape in ShapeKind::ALL {
        let piece = spawn(shape, &field);
        let cells = piece.positions();
        assert_eq!(cells.len(), 4);
        for (i, pos) in cells.iter().enumerate() {
            assert!(pos.in_bounds(), "{:?} spawned out of bounds at {:?}", shape, pos);
            assert!(!cells[..i].contains(pos), "{:?} repeats a cell", shape);
        }
        assert_eq!(piece.rotation(), RotationAngle::Deg0);
    }
}

#[test]
fn test_spawn_uses_canonical_offsets_only() {
    let mut field = Field::new();
    // Blocks where a rotated T would go do not matter.
    field.set(Position::new(4, 2), Some(Block::new(0, ShapeKind::O)));
    assert!(Piece::can_spawn(ShapeKind::T, &field));

    field.set(Position::new(5, 0), Some(Block::new(1, ShapeKind::O)));
    assert!(!Piece::can_spawn(ShapeKind::T, &field));
    assert!(Piece::spawn(ShapeKind::T, &field, 0).is_none());
}

#[test]
fn test_four_rotations_restore_cells() {
    let field = Field::new();
    for shape in ShapeKind::ALL {
        let mut piece = spawn(shape, &field);
        for _ in 0..8 {
            piece.move_down();
        }
        let start = *piece.positions();

        for _ in 0..4 {
            assert!(piece.can_rotate(0, 0, &field), "{:?} blocked in open space", shape);
            piece.rotate_with_offset(0, 0);
        }

        assert_eq!(piece.positions(), &start);
        assert_eq!(piece.rotation(), RotationAngle::Deg0);
    }
}

#[test]
fn test_horizontal_collision_with_walls() {
    let field = Field::new();
    let mut piece = spawn(ShapeKind::I, &field);

    let mut moves = 0;
    while !piece.would_collide_horizontally(-1, &field) {
        piece.move_left();
        moves += 1;
    }
    assert_eq!(moves, 3);
    assert_eq!(piece.positions()[0].x, 0);

    while !piece.would_collide_horizontally(1, &field) {
        piece.move_right();
    }
    assert_eq!(piece.positions()[3].x, GRID_COLS as i8 - 1);
}

#[test]
fn test_horizontal_collision_checks_each_block_row() {
    let mut field = Field::new();
    let piece = spawn(ShapeKind::T, &field);
    // The T stem is at (4, 1); a block at (3, 1) only touches the stem's row.
    field.set(Position::new(3, 1), Some(Block::new(0, ShapeKind::O)));
    assert!(piece.would_collide_horizontally(-1, &field));
    assert!(!piece.would_collide_horizontally(1, &field));
}

#[test]
fn test_o_piece_falls_to_the_floor_and_locks_two_by_two() {
    let mut field = Field::new();
    let mut piece = spawn(ShapeKind::O, &field);

    // Lowest O cell starts at row 1, so 18 steps reach row 19.
    for _ in 0..18 {
        assert!(!piece.would_collide_vertically(&field));
        piece.move_down();
    }
    assert!(piece.would_collide_vertically(&field));

    lock(&mut field, piece);
    assert_eq!(field.occupied_count(), 4);
    for y in [18, 19] {
        let row: Vec<i8> = (0..GRID_COLS as i8)
            .filter(|&x| field.is_occupied(x, y))
            .collect();
        assert_eq!(row, vec![4, 5]);
    }
}

#[test]
fn test_vertical_collision_on_locked_blocks() {
    let mut field = Field::new();
    field.set(Position::new(5, 6), Some(Block::new(0, ShapeKind::Z)));
    let mut piece = spawn(ShapeKind::I, &field);
    for _ in 0..5 {
        assert!(!piece.would_collide_vertically(&field));
        piece.move_down();
    }
    assert!(piece.would_collide_vertically(&field));
}

#[test]
fn test_vertical_i_completes_row_at_right_wall() {
    let mut field = Field::new();
    for x in 0..GRID_COLS as i8 - 1 {
        field.set(Position::new(x, 19), Some(Block::new(100, ShapeKind::Z)));
    }

    let mut piece = spawn(ShapeKind::I, &field);
    piece.move_down();
    piece.move_down();
    assert!(piece.can_rotate(0, 0, &field));
    piece.rotate_with_offset(0, 0);

    while !piece.would_collide_horizontally(1, &field) {
        piece.move_right();
    }
    assert!(piece.positions().iter().all(|p| p.x == 9));

    while !piece.would_collide_vertically(&field) {
        piece.move_down();
    }
    assert!(piece.positions().contains(&Position::new(9, 19)));

    lock(&mut field, piece);
    assert!(field.find_complete_rows().contains(&19));
}

#[test]
fn test_block_ids_move_into_field_on_lock() {
    let mut field = Field::new();
    let mut piece = Piece::spawn(ShapeKind::S, &field, 8).unwrap();
    while !piece.would_collide_vertically(&field) {
        piece.move_down();
    }
    let cells = *piece.positions();
    lock(&mut field, piece);

    let mut ids: Vec<u32> = cells
        .iter()
        .map(|p| field.get(*p).flatten().map(|b| b.id()).unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![8, 9, 10, 11]);
}
