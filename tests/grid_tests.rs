use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tank_duel::{GameConfig, GameError, Grid, Position, OBSTACLE_COUNT};

#[test]
fn test_open_grid_has_no_walls() {
    let grid = Grid::open(15, 15).unwrap();
    assert_eq!(grid.blocked_count(), 0);
    assert!(grid.is_open(Position::new(0, 0)));
    assert!(grid.is_open(Position::new(14, 14)));
}

#[test]
fn test_bounds() {
    let grid = Grid::open(4, 3).unwrap();
    assert!(grid.in_bounds(Position::new(3, 2)));
    assert!(!grid.in_bounds(Position::new(4, 2)));
    assert!(!grid.in_bounds(Position::new(3, 3)));
    assert!(!grid.in_bounds(Position::new(-1, 0)));
    assert!(!grid.is_open(Position::new(0, -1)));
    assert!(!grid.is_blocked(Position::new(0, -1)));
}

#[test]
fn test_from_blocked_uses_x_y() {
    let grid = Grid::from_blocked(5, 3, [(4, 0), (1, 2)]).unwrap();
    assert!(grid.is_blocked(Position::new(4, 0)));
    assert!(grid.is_blocked(Position::new(1, 2)));
    assert!(grid.is_open(Position::new(0, 0)));
    let cells: Vec<_> = grid.blocked_cells().collect();
    assert_eq!(cells, vec![(4, 0), (1, 2)]);
}

#[test]
fn test_grid_errors() {
    assert_eq!(Grid::open(0, 5).unwrap_err(), GameError::EmptyGrid);
    assert!(matches!(
        Grid::open(40, 40),
        Err(GameError::BitBoardError(_))
    ));
    assert!(Grid::from_blocked(3, 3, [(3, 0)]).is_err());
}

#[test]
fn test_generate_is_reproducible() {
    let config = GameConfig::default();
    let a = Grid::generate(&config, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Grid::generate(&config, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_with_no_obstacles() {
    let config = GameConfig {
        obstacles: 0,
        ..GameConfig::default()
    };
    let grid = Grid::generate(&config, &mut SmallRng::seed_from_u64(1)).unwrap();
    assert_eq!(grid.blocked_count(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_maze_keeps_starts_open(seed in any::<u64>()) {
        let config = GameConfig::default();
        let grid = Grid::generate(&config, &mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(grid.cols(), config.cols);
        prop_assert_eq!(grid.rows(), config.rows);
        // duplicate draws may leave fewer walls than requested
        prop_assert!(grid.blocked_count() <= OBSTACLE_COUNT);
        prop_assert!(grid.is_open(Position::from(config.player_start())));
        prop_assert!(grid.is_open(Position::from(config.opponent_start())));
    }
}
