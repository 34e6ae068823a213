use tank_duel::{BitBoard, BitBoardError};

#[test]
fn test_new_sizes() {
    // Success for board that fits across several words
    let ok = BitBoard::<u64, 4>::new(15, 15);
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 2>::new(5, 5);
    assert!(matches!(
        err,
        Err(BitBoardError::SizeTooLarge { cells: 25, capacity: 16 })
    ));

    // rows * cols overflowing usize is reported, not a panic
    let err = BitBoard::<u64, 4>::new(2, usize::MAX);
    assert!(matches!(
        err,
        Err(BitBoardError::SizeTooLarge { cells: usize::MAX, capacity: 256 })
    ));
}

#[test]
fn test_get_set_clear_across_words() {
    let mut bb = BitBoard::<u16, 4>::new(7, 9).unwrap();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    // index 6 * 9 + 8 = 62 lives in the last word
    bb.set(6, 8).unwrap();
    assert!(bb.get(6, 8).unwrap());
    assert_eq!(bb.count_ones(), 2);

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u64, 1>::new(3, 5).unwrap();
    assert_eq!(
        bb.set(3, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(bb.get(0, 5).is_err());
}

#[test]
fn test_iter_set_bits() {
    let mut bb = BitBoard::<u32, 2>::new(6, 6).unwrap();
    bb.set(0, 1).unwrap();
    bb.set(5, 5).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (5, 5)]);
}
