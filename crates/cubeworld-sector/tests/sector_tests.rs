use cubeworld_geom::Vec3;
use cubeworld_sector::{
    BlockPos, SECTOR_SIZE, SectorCoord, SectorError, SectorGrid, load_grid_from_path, normalize,
    reverse_sectorize, sectorize,
};
use hashbrown::HashSet;

#[test]
fn normalize_pins_half_rounding() {
    assert_eq!(normalize(Vec3::new(0.5, 0.5, 0.5)).unwrap(), BlockPos::new(1, 1, 1));
    assert_eq!(
        normalize(Vec3::new(-0.5, -0.5, -0.5)).unwrap(),
        BlockPos::new(-1, -1, -1)
    );
    assert_eq!(normalize(Vec3::new(1.5, 2.5, -2.5)).unwrap(), BlockPos::new(2, 3, -3));
}

#[test]
fn sectorize_floors_negative_coordinates() {
    let s = sectorize(Vec3::new(-1.0, 0.0, -1.0)).unwrap();
    assert_eq!(s.to_tuple(), (-1, 0, -1));
    assert_eq!(sectorize(Vec3::new(-16.0, 0.0, -17.0)).unwrap(), SectorCoord::new(-1, -2));
    assert_eq!(sectorize(Vec3::new(15.0, 0.0, 16.0)).unwrap(), SectorCoord::new(0, 1));
}

#[test]
fn sectorize_rounds_before_dividing() {
    // 15.5 rounds to block 16, the first block of sector 1
    assert_eq!(sectorize(Vec3::new(15.5, 0.0, 15.4)).unwrap(), SectorCoord::new(1, 0));
    // -0.4 rounds to block 0, still sector 0
    assert_eq!(sectorize(Vec3::new(-0.4, 0.0, -0.6)).unwrap(), SectorCoord::new(0, -1));
}

#[test]
fn sectorize_ignores_height() {
    let low = sectorize(Vec3::new(5.0, -1000.0, 5.0)).unwrap();
    let high = sectorize(Vec3::new(5.0, 1000.0, 5.0)).unwrap();
    assert_eq!(low, high);
    assert_eq!(low.to_tuple().1, 0);
}

#[test]
fn reverse_sectorize_origin_sector() {
    let cols = reverse_sectorize(SectorCoord::new(0, 0)).unwrap();
    assert_eq!(cols.len(), 256);
    let unique: HashSet<_> = cols.iter().copied().collect();
    assert_eq!(unique.len(), 256);
    assert!(cols.iter().all(|&(x, z)| (0..16).contains(&x) && (0..16).contains(&z)));
    assert_eq!(cols[0], (0, 0));
    assert_eq!(cols[1], (0, 1));
    assert_eq!(cols[16], (1, 0));
    assert_eq!(cols[255], (15, 15));
}

#[test]
fn reverse_sectorize_tuple_form() {
    let grid = SectorGrid::default();
    let cols = grid.reverse_sectorize_tuple((-1, 0, 2)).unwrap();
    assert_eq!(cols[0], (-16, 32));
    assert_eq!(*cols.last().unwrap(), (-1, 47));
    let err = grid.reverse_sectorize_tuple((0, 3, 0)).unwrap_err();
    assert!(matches!(err, SectorError::InvalidSector(_)));
    assert_eq!(err.to_string(), "invalid sector: sector y must be 0, got 3");
}

#[test]
fn round_trip_small_grid() {
    let grid = SectorGrid::with_size(3).unwrap();
    for sx in -3..=3 {
        for sz in -3..=3 {
            let s = SectorCoord::new(sx, sz);
            let cols = grid.reverse_sectorize(s).unwrap();
            assert_eq!(cols.len(), 9);
            for (x, z) in cols {
                assert_eq!(grid.sector_of_column(x, z), s);
                assert!(grid.contains_column(s, x, z));
            }
        }
    }
}

#[test]
fn sectors_tile_a_region_without_overlap() {
    let grid = SectorGrid::default();
    let (lo, hi) = (-40, 40);
    let touching: HashSet<SectorCoord> = (lo..hi)
        .flat_map(|x| (lo..hi).map(move |z| (x, z)))
        .map(|(x, z)| grid.sector_of_column(x, z))
        .collect();
    let mut seen: HashSet<(i32, i32)> = HashSet::new();
    for s in &touching {
        for c in grid.reverse_sectorize(*s).unwrap() {
            assert!(seen.insert(c), "column {:?} listed twice", c);
        }
    }
    for x in lo..hi {
        for z in lo..hi {
            assert!(seen.contains(&(x, z)));
        }
    }
}

#[test]
fn block_center_round_trips_through_normalize() {
    let b = BlockPos::new(-7, 64, 1023);
    assert_eq!(normalize(b.center()).unwrap(), b);
}

#[test]
fn invalid_config_is_rejected_once_at_construction() {
    assert_eq!(SectorGrid::with_size(0), Err(SectorError::DivisionConfig(0)));
    assert_eq!(SectorGrid::with_size(-16), Err(SectorError::DivisionConfig(-16)));
    assert_eq!(SectorGrid::with_size(SECTOR_SIZE.into()).unwrap(), SectorGrid::default());
}

#[test]
fn load_grid_from_file() {
    let dir = std::env::temp_dir().join(format!("cubeworld-sector-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let good = dir.join("good.toml");
    std::fs::write(&good, "[sector]\nsize = 8\n").unwrap();
    assert_eq!(load_grid_from_path(&good).unwrap().size(), 8);

    let bad = dir.join("bad.toml");
    std::fs::write(&bad, "[sector]\nsize = 0\n").unwrap();
    let err = load_grid_from_path(&bad).unwrap_err();
    assert!(err.to_string().contains("sector size"));

    assert!(load_grid_from_path(&dir.join("missing.toml")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
