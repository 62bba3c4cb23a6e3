use phash_core::{
    batch_compare_distance, batch_compare_similarity, Algorithm, Direction, Error, GrayGrid,
    Hasher, PHash,
};

fn sample_hashes(algorithm: Algorithm) -> Vec<PHash> {
    [
        0u64,
        u64::MAX,
        0x1a2b_3c4d_5e6f_7890,
        0x8000_0000_0000_0001,
        0x0123_4567_89ab_cdef,
        0xdead_beef_0000_0000,
    ]
    .iter()
    .map(|&bits| PHash::from_bits(bits, algorithm))
    .collect()
}

#[test]
fn test_encodings_round_trip() {
    for algorithm in Algorithm::ALL {
        for hash in sample_hashes(algorithm) {
            assert_eq!(PHash::from_hex(&hash.to_hex(), algorithm).unwrap(), hash);
            assert_eq!(PHash::from_bytes(&hash.to_bytes(), algorithm).unwrap(), hash);
            assert_eq!(hash.to_string().parse::<PHash>().unwrap(), hash);
            assert_eq!(hash.to_hex().len(), 16);
        }
    }
}

#[test]
fn test_distance_laws() {
    let hashes = sample_hashes(Algorithm::Perceptual);
    for a in &hashes {
        assert_eq!(a.distance(a).unwrap(), 0);
        assert_eq!(a.similarity(a).unwrap(), 1.0);
        for b in &hashes {
            let d = a.distance(b).unwrap();
            assert_eq!(d, b.distance(a).unwrap());
            assert!(d <= 64);
            assert_eq!(a.similarity(b).unwrap(), 1.0 - d as f64 / 64.0);
        }
    }
}

#[test]
fn test_cross_algorithm_comparison_is_rejected() {
    let average = PHash::from_bits(7, Algorithm::Average);
    let perceptual = PHash::from_bits(7, Algorithm::Perceptual);
    assert!(matches!(
        average.distance(&perceptual),
        Err(Error::Mismatch { .. })
    ));
}

#[test]
fn test_batch_distance_equals_pairwise() {
    let hashes = sample_hashes(Algorithm::Median);
    let target = hashes[2];
    let batch = &hashes[3..6];
    assert_eq!(
        batch_compare_distance(&target, batch).unwrap(),
        vec![
            target.distance(&batch[0]).unwrap(),
            target.distance(&batch[1]).unwrap(),
            target.distance(&batch[2]).unwrap(),
        ]
    );
    assert_eq!(batch_compare_similarity(&target, batch).unwrap().len(), 3);
}

#[test]
fn test_uniform_average_hash_is_zero() {
    let grid = GrayGrid::from_fn(8, 8, |_, _| 128);
    let hash = Hasher::with_defaults(Algorithm::Average)
        .hash_grid(&grid)
        .unwrap();
    assert_eq!(hash, PHash::from_bits(0, Algorithm::Average));
    assert_eq!(hash.to_string(), "average:0000000000000000");
}

#[test]
fn test_size_errors() {
    assert!(matches!(
        Hasher::new(Algorithm::Average, Some(9), Direction::Horizontal),
        Err(Error::Size { .. })
    ));
    assert!(matches!(
        Hasher::new(Algorithm::Perceptual, Some(4), Direction::Horizontal),
        Err(Error::Size { .. })
    ));
    assert!(matches!(
        Hasher::Average { size: 9 }.hash_grid(&GrayGrid::from_fn(9, 9, |_, _| 0)),
        Err(Error::Size { .. })
    ));
}

#[test]
fn test_every_algorithm_tags_its_hash() {
    for algorithm in Algorithm::ALL {
        let hasher = Hasher::with_defaults(algorithm);
        let (width, height) = hasher.grid_dimensions();
        let grid = GrayGrid::from_fn(width, height, |x, y| ((x * 7 + y * 13) % 251) as u8);
        assert_eq!(hasher.hash_grid(&grid).unwrap().algorithm(), algorithm);
    }
}
