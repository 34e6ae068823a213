use rand::{rngs::SmallRng, SeedableRng};
use tank_duel::{
    can_see, line_of_sight, plan_turn, random_step, Direction, Grid, OpponentAction, Position,
    Role, Tank,
};

fn tank(x: i32, y: i32, role: Role) -> Tank {
    Tank::new(Position::new(x, y), role)
}

#[test]
fn test_wall_between_on_row_blocks_sight() {
    let grid = Grid::from_blocked(15, 15, [(7, 13)]).unwrap();
    let mut shooter = tank(13, 13, Role::Opponent);
    let target = tank(1, 13, Role::Player);
    assert!(!can_see(&grid, &mut shooter, &target));
    // facing untouched when nothing is seen
    assert_eq!(shooter.facing(), Direction::Up);
}

#[test]
fn test_clear_row_orients_toward_target() {
    let grid = Grid::open(15, 15).unwrap();
    let mut shooter = tank(13, 13, Role::Opponent);
    let target = tank(1, 13, Role::Player);
    assert!(can_see(&grid, &mut shooter, &target));
    assert_eq!(shooter.facing(), Direction::Left);

    let mut shooter = tank(0, 4, Role::Opponent);
    let target = tank(9, 4, Role::Player);
    assert!(can_see(&grid, &mut shooter, &target));
    assert_eq!(shooter.facing(), Direction::Right);
}

#[test]
fn test_clear_column_orients_toward_target() {
    let grid = Grid::from_blocked(15, 15, [(3, 0), (3, 14)]).unwrap();
    assert_eq!(
        line_of_sight(&grid, Position::new(3, 12), Position::new(3, 2)),
        Some(Direction::Up)
    );
    assert_eq!(
        line_of_sight(&grid, Position::new(3, 2), Position::new(3, 12)),
        Some(Direction::Down)
    );
}

#[test]
fn test_walls_at_endpoints_do_not_block() {
    // only cells strictly between the tanks count
    let grid = Grid::from_blocked(15, 15, [(2, 5), (8, 5)]).unwrap();
    assert_eq!(
        line_of_sight(&grid, Position::new(2, 5), Position::new(8, 5)),
        Some(Direction::Right)
    );
}

#[test]
fn test_no_sight_off_axis() {
    let grid = Grid::open(15, 15).unwrap();
    assert_eq!(
        line_of_sight(&grid, Position::new(1, 1), Position::new(13, 13)),
        None
    );
}

#[test]
fn test_adjacent_tanks_see_each_other() {
    let grid = Grid::open(15, 15).unwrap();
    assert_eq!(
        line_of_sight(&grid, Position::new(5, 5), Position::new(4, 5)),
        Some(Direction::Left)
    );
}

#[test]
fn test_plan_turn_fires_when_visible() {
    let grid = Grid::open(15, 15).unwrap();
    let mut shooter = tank(13, 1, Role::Opponent);
    let target = tank(1, 1, Role::Player);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        plan_turn(&grid, &mut shooter, &target, &mut rng),
        OpponentAction::Fire(Direction::Left)
    );
    assert_eq!(shooter.facing(), Direction::Left);
}

#[test]
fn test_plan_turn_wanders_to_open_neighbour() {
    let grid = Grid::from_blocked(15, 15, [(13, 12), (12, 13)]).unwrap();
    let mut shooter = tank(13, 13, Role::Opponent);
    let target = tank(1, 1, Role::Player);
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        match plan_turn(&grid, &mut shooter, &target, &mut rng) {
            OpponentAction::Move(dir) => {
                assert!(matches!(dir, Direction::Right | Direction::Down));
                assert!(grid.is_open(shooter.pos().step(dir)));
            }
            other => panic!("expected a move, got {:?}", other),
        }
    }
}

#[test]
fn test_random_step_boxed_in() {
    let grid = Grid::from_blocked(5, 5, [(1, 2), (3, 2), (2, 1), (2, 3)]).unwrap();
    let shooter = tank(2, 2, Role::Opponent);
    let mut rng = SmallRng::seed_from_u64(11);
    assert_eq!(random_step(&grid, &shooter, &mut rng), None);
}

#[test]
fn test_random_step_tries_every_direction() {
    let grid = Grid::open(5, 5).unwrap();
    let shooter = tank(2, 2, Role::Opponent);
    let mut seen = Vec::new();
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let dir = random_step(&grid, &shooter, &mut rng).unwrap();
        if !seen.contains(&dir) {
            seen.push(dir);
        }
    }
    assert_eq!(seen.len(), 4);
}
