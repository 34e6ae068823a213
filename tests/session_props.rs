use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use tank_duel::{FrameInput, GameConfig, Grid, Session, Tank};

/// Decode a byte into held keys; restart is left out so games can end.
fn frame_from_bits(bits: u8) -> FrameInput {
    FrameInput {
        left: bits & 0b00001 != 0,
        right: bits & 0b00010 != 0,
        up: bits & 0b00100 != 0,
        down: bits & 0b01000 != 0,
        fire: bits & 0b10000 != 0,
        restart: false,
    }
}

fn tank_on_open_cell(session: &Session, tank: &Tank) -> bool {
    session.grid().is_open(tank.pos())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nothing_rests_on_walls(seed in any::<u64>(), frames in prop::collection::vec(any::<u8>(), 1..200)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new(GameConfig::default(), &mut rng).unwrap();
        for bits in frames {
            session.tick(&frame_from_bits(bits), &mut rng);
            prop_assert!(tank_on_open_cell(&session, session.player()));
            prop_assert!(tank_on_open_cell(&session, session.opponent()));
            for shot in session.projectiles() {
                prop_assert!(session.grid().is_open(shot.pos));
                prop_assert_ne!(shot.pos, session.player().pos());
                prop_assert_ne!(shot.pos, session.opponent().pos());
            }
        }
    }

    #[test]
    fn finished_game_is_frozen(seed in any::<u64>(), frames in prop::collection::vec(any::<u8>(), 1..400)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new(GameConfig::default(), &mut rng).unwrap();
        let mut frozen = None;
        for bits in frames {
            session.tick(&frame_from_bits(bits), &mut rng);
            if let Some(snapshot) = &frozen {
                prop_assert_eq!(&session.snapshot(), snapshot);
            } else if session.is_over() {
                frozen = Some(session.snapshot());
            }
        }
    }

    #[test]
    fn restart_resets_everything(seed in any::<u64>(), frames in prop::collection::vec(any::<u8>(), 1..100)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = GameConfig::default();
        let mut session = Session::new(config, &mut rng).unwrap();
        for bits in frames {
            session.tick(&frame_from_bits(bits), &mut rng);
        }
        let expected_grid = Grid::generate(&config, &mut rng.clone()).unwrap();
        session.restart(&mut rng).unwrap();
        prop_assert_eq!(session.grid(), &expected_grid);
        prop_assert_eq!(session.turns(), 0);
        prop_assert_eq!(session.shots(), 0);
        let fresh = Session::new(config, &mut SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert!(session.projectiles().is_empty());
        prop_assert_eq!(session.turn(), fresh.turn());
        prop_assert_eq!(session.player(), fresh.player());
        prop_assert_eq!(session.opponent(), fresh.opponent());
        prop_assert_eq!(session.outcome(), None);
        prop_assert_eq!(session.ticks(), 0);
    }
}
