//! Whole-pipeline layout tests
//!
//! Generates levels across many seeds and checks the structural promises:
//! settled rooms never overlap, every door has a mirror on the far side of
//! the seam, corridors are flush at both ends, and a seed replays its level
//! exactly.

use proptest::prelude::*;

use warren_core::config::GridConfig;
use warren_core::layout::{generate, Axis, Door, LevelGraph, Room, RoomKind, Wall};

// ============================================================================
// Helpers
// ============================================================================

fn mirrors_of<'a>(graph: &'a LevelGraph, owner: &Room, door: &Door) -> Vec<&'a Door> {
    graph.rooms[door.connects_to]
        .doors
        .iter()
        .filter(|back| back.connects_to == owner.id && back.wall == door.wall.opposite())
        .collect()
}

fn assert_tile_aligned(room: &Room, cfg: &GridConfig) {
    let t = cfg.tile_size;
    assert_eq!(room.rect.x % t, 0, "room {} x off grid", room.id);
    assert_eq!(room.rect.y % t, 0, "room {} y off grid", room.id);
    assert_eq!(room.rect.width, room.cols * t, "room {} width", room.id);
    assert_eq!(room.rect.height, room.rows * t, "room {} height", room.id);
}

fn assert_doors_mirrored(graph: &LevelGraph, cfg: &GridConfig) {
    for room in &graph.rooms {
        for door in &room.doors {
            assert_ne!(door.connects_to, room.id, "room {} connects to itself", room.id);
            let mirrors = mirrors_of(graph, room, door);
            assert_eq!(
                mirrors.len(),
                1,
                "door {} -> {} has {} mirrors",
                room.id,
                door.connects_to,
                mirrors.len()
            );

            // The two doorways occupy adjacent tiles across the seam
            let here = room.door_tile(door, cfg);
            let there = graph.rooms[door.connects_to].door_tile(mirrors[0], cfg);
            if door.wall.is_side() {
                assert_eq!(here.1, there.1, "side door rows {} -> {}", room.id, door.connects_to);
                assert_eq!((here.0 - there.0).abs(), 1, "side door columns");
            } else {
                assert_eq!(here.0, there.0, "ceiling door columns");
                assert_eq!((here.1 - there.1).abs(), 1, "ceiling door rows");
            }
        }
    }
}

fn assert_no_overlap(graph: &LevelGraph) {
    for a in &graph.rooms {
        for b in &graph.rooms {
            if a.id < b.id {
                assert!(
                    !a.rect.overlaps(&b.rect),
                    "rooms {} and {} overlap: {:?} {:?}",
                    a.id,
                    b.id,
                    a.rect,
                    b.rect
                );
            }
        }
    }
}

// ============================================================================
// Settled geometry
// ============================================================================

#[test]
fn test_settled_rooms_never_overlap() {
    let cfg = GridConfig::default();
    for seed in 0..40 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        assert_no_overlap(&graph);
    }
}

#[test]
fn test_rooms_stay_on_the_tile_grid() {
    let cfg = GridConfig::default();
    for seed in 0..20 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        for room in &graph.rooms {
            assert_tile_aligned(room, &cfg);
        }
    }
}

#[test]
fn test_chamber_extents_respect_config() {
    let cfg = GridConfig::default();
    let graph = generate(20, &cfg, Some(77)).unwrap();
    for room in graph.chambers() {
        for extent in [room.cols, room.rows] {
            assert_eq!(extent % 2, 0, "chamber {} has odd extent", room.id);
            assert!(extent >= 2 * cfg.min_extent);
            assert!(extent <= 2 * (cfg.max_extent - 1));
        }
    }
}

// ============================================================================
// Doors
// ============================================================================

#[test]
fn test_every_door_is_mirrored_once() {
    let cfg = GridConfig::default();
    for seed in 0..40 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        assert_doors_mirrored(&graph, &cfg);
    }
}

#[test]
fn test_doors_sit_on_their_wall_clear_of_corners() {
    let cfg = GridConfig::default();
    for seed in 0..20 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        for room in &graph.rooms {
            for door in &room.doors {
                let p = door.joining_point;
                match door.wall {
                    Wall::Left => assert_eq!(p.x, 0),
                    Wall::Right => assert_eq!(p.x, room.cols - 1),
                    Wall::Top => assert_eq!(p.y, room.rows - 1),
                    Wall::Bottom => assert_eq!(p.y, 0),
                }
                if door.wall.is_side() {
                    assert!(
                        p.y >= 1 && p.y <= room.rows - 2,
                        "door on room {} hugs a corner: {:?}",
                        room.id,
                        p
                    );
                } else {
                    assert!(
                        p.x >= 1 && p.x <= room.cols - 2,
                        "door on room {} hugs a corner: {:?}",
                        room.id,
                        p
                    );
                }
            }
        }
    }
}

#[test]
fn test_rooms_share_at_most_one_door_pair() {
    let cfg = GridConfig::default();
    for seed in 0..20 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        for room in &graph.rooms {
            for other in &graph.rooms {
                let between = room
                    .doors
                    .iter()
                    .filter(|door| door.connects_to == other.id)
                    .count();
                assert!(
                    between <= 1,
                    "rooms {} and {} share {} doors",
                    room.id,
                    other.id,
                    between
                );
            }
        }
    }
}

// ============================================================================
// Corridors
// ============================================================================

#[test]
fn test_corridors_are_flush_at_both_ends() {
    let cfg = GridConfig::default();
    for seed in 0..40 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        for corridor in graph.corridors() {
            assert_eq!(
                corridor.doors.len(),
                2,
                "corridor {} has {} doors",
                corridor.id,
                corridor.doors.len()
            );
            assert_ne!(
                corridor.doors[0].connects_to, corridor.doors[1].connects_to,
                "corridor {} joins a room to itself",
                corridor.id
            );
            for door in &corridor.doors {
                let partner = &graph.rooms[door.connects_to];
                match door.wall {
                    Wall::Left => assert_eq!(corridor.left(), partner.right()),
                    Wall::Right => assert_eq!(corridor.right(), partner.left()),
                    Wall::Top => assert_eq!(corridor.top(), partner.bottom()),
                    Wall::Bottom => assert_eq!(corridor.bottom(), partner.top()),
                }
            }
        }
    }
}

#[test]
fn test_corridors_have_the_configured_cross_section() {
    let cfg = GridConfig::default();
    for seed in 0..20 {
        let graph = generate(20, &cfg, Some(seed)).unwrap();
        for corridor in graph.corridors() {
            match corridor.kind {
                RoomKind::Corridor(Axis::Horizontal) => {
                    assert_eq!(corridor.rows, cfg.corridor_tiles);
                    assert!(corridor.cols >= 1);
                }
                RoomKind::Corridor(Axis::Vertical) => {
                    assert_eq!(corridor.cols, cfg.corridor_tiles);
                    assert!(corridor.rows >= 1);
                }
                RoomKind::Chamber => panic!("corridors() yielded a chamber"),
            }
        }
    }
}

#[test]
fn test_layouts_grow_corridors() {
    // Twenty scattered rooms practically always strand a few walls, so at
    // least one seed in a short run must synthesize corridors
    let cfg = GridConfig::default();
    let synthesized: usize = (0..10)
        .map(|seed| generate(20, &cfg, Some(seed)).unwrap().corridors().count())
        .sum();
    assert!(synthesized > 0, "no corridor appeared across ten seeds");
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_same_seed_replays_the_same_level() {
    let cfg = GridConfig::default();
    let a = generate(20, &cfg, Some(1234)).unwrap();
    let b = generate(20, &cfg, Some(1234)).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap(),
        "same-seed runs diverged"
    );
}

#[test]
fn test_different_seeds_vary_the_level() {
    let cfg = GridConfig::default();
    let a = generate(20, &cfg, Some(42)).unwrap();
    let b = generate(20, &cfg, Some(999)).unwrap();
    assert_ne!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap(),
        "seeds 42 and 999 produced the same level"
    );
}

#[test]
fn test_entropy_seed_is_recorded_and_replayable() {
    let cfg = GridConfig::default();
    let first = generate(10, &cfg, None).unwrap();
    let replay = generate(10, &cfg, Some(first.seed)).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&replay).unwrap(),
        "recorded seed did not replay the level"
    );
}

// ============================================================================
// Alternate grids
// ============================================================================

#[test]
fn test_invariants_hold_on_a_finer_grid() {
    let cfg = GridConfig {
        tile_size: 2,
        min_extent: 2,
        max_extent: 6,
        min_offset: 0,
        max_offset: 30,
        door_clearance_tiles: 3,
        corridor_tiles: 3,
    };
    cfg.validate().unwrap();
    for seed in 0..10 {
        let graph = generate(12, &cfg, Some(seed)).unwrap();
        assert_no_overlap(&graph);
        assert_doors_mirrored(&graph, &cfg);
        for room in &graph.rooms {
            assert_tile_aligned(room, &cfg);
        }
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #[test]
    fn prop_any_seed_yields_a_sound_level(seed in any::<u64>(), count in 2usize..=16) {
        let cfg = GridConfig::default();
        let graph = generate(count, &cfg, Some(seed)).unwrap();
        prop_assert_eq!(graph.chambers().count(), count);
        assert_no_overlap(&graph);
        assert_doors_mirrored(&graph, &cfg);
        for room in &graph.rooms {
            assert_tile_aligned(room, &cfg);
        }
    }
}
