//! Movement legality checks shared by animals and actors.
//!
//! A destination is reachable when it passes the per-tile checks and an
//! axis-aligned path of single steps leads to it. Straight-line targets only
//! consider the direct line. Diagonally offset targets consider exactly two
//! elbow paths: horizontal-then-vertical through `(to.x, from.y)` and
//! vertical-then-horizontal through `(from.x, to.y)`. Detours around
//! obstacles that need more than one bend are deliberately not explored, so
//! the enumerated destination sets stay stable.
//!
//! Every check is evaluated against a hypothetical mover position passed as a
//! parameter; nothing here mutates the scenario.

use research_sim_core::{Coordinate, MoveProfile, SimError};

use crate::{Scenario, Tile};

/// Outcome of validating one hop of a candidate path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reach {
    Valid,
    Invalid,
    OutOfBounds,
}

/// Whether the tile under evaluation is the end of the requested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Leg {
    Arrival,
    Transit,
}

/// Reports whether a mover at `origin` may legally end a move on `destination`.
pub(crate) fn can_reach(
    world: &Scenario,
    profile: MoveProfile,
    origin: Coordinate,
    destination: Coordinate,
) -> Result<bool, SimError> {
    match reach(world, profile, origin, destination, Leg::Arrival) {
        Reach::Valid => Ok(true),
        Reach::Invalid => Ok(false),
        Reach::OutOfBounds => Err(SimError::OutOfBounds(destination)),
    }
}

/// Lists every reachable destination within the mover's range.
///
/// Candidates are scanned row by row across the `(2r+1)×(2r+1)` square
/// centred on `origin`; out-of-bounds candidates are skipped.
pub(crate) fn possible_moves(
    world: &Scenario,
    profile: MoveProfile,
    origin: Coordinate,
) -> Vec<Coordinate> {
    let radius = i32::try_from(profile.max_distance).unwrap_or(i32::MAX);
    let mut moves = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let candidate = origin.translate(dx, dy);
            if origin.manhattan_distance(candidate) > profile.max_distance {
                continue;
            }
            if reach(world, profile, origin, candidate, Leg::Arrival) == Reach::Valid {
                moves.push(candidate);
            }
        }
    }
    moves
}

fn reach(
    world: &Scenario,
    profile: MoveProfile,
    from: Coordinate,
    to: Coordinate,
    leg: Leg,
) -> Reach {
    let Some(tile) = world.tile_at(to) else {
        return Reach::OutOfBounds;
    };
    if to == from {
        return Reach::Invalid;
    }
    let distance = from.manhattan_distance(to);
    if distance > profile.max_distance
        || !profile.terrain.permits(tile.terrain())
        || !can_enter(tile, profile, leg)
    {
        return Reach::Invalid;
    }
    if distance == 1 {
        return Reach::Valid;
    }

    let delta = from.distance(to);
    if delta.x() == 0 || delta.y() == 0 {
        let previous = to.translate(-delta.x().signum(), -delta.y().signum());
        return match reach(world, profile, from, previous, Leg::Transit) {
            Reach::Valid => Reach::Valid,
            Reach::Invalid | Reach::OutOfBounds => Reach::Invalid,
        };
    }

    let elbows = [
        Coordinate::new(to.x(), from.y()),
        Coordinate::new(from.x(), to.y()),
    ];
    let via_elbow = elbows.into_iter().any(|elbow| {
        reach(world, profile, elbow, to, leg) == Reach::Valid
            && reach(world, profile, from, elbow, Leg::Transit) == Reach::Valid
    });
    if via_elbow {
        Reach::Valid
    } else {
        Reach::Invalid
    }
}

/// Empty tiles are always enterable; a mover that collects on arrival may
/// also finish on a collectable occupant.
fn can_enter(tile: &Tile, profile: MoveProfile, leg: Leg) -> bool {
    match tile.occupant() {
        None => true,
        Some(occupant) => {
            leg == Leg::Arrival && profile.collects_on_arrival && occupant.kind().is_collectable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_sim_core::{Animal, EntityKind, Habitat, Size, TerrainRule, TileType};

    fn walker(max_distance: u32) -> MoveProfile {
        MoveProfile {
            max_distance,
            terrain: TerrainRule::Habitat(Habitat::Land),
            collects_on_arrival: false,
        }
    }

    #[test]
    fn self_is_never_reachable() {
        let world = Scenario::new("self", 5, 5, 0).expect("scenario");
        let origin = Coordinate::new(2, 2);
        assert_eq!(can_reach(&world, walker(4), origin, origin), Ok(false));
    }

    #[test]
    fn out_of_bounds_destination_is_reported() {
        let world = Scenario::new("bounds", 5, 5, 0).expect("scenario");
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 0), Coordinate::new(-1, 0)),
            Err(SimError::OutOfBounds(Coordinate::new(-1, 0)))
        );
    }

    #[test]
    fn range_limits_reach_on_every_terrain() {
        for terrain in TileType::ALL {
            let world = Scenario::with_terrain("range", 7, 7, 0, vec![terrain; 49])
                .expect("scenario");
            let profile = MoveProfile {
                max_distance: 2,
                terrain: TerrainRule::Habitat(Habitat::Ocean),
                collects_on_arrival: false,
            };
            assert_eq!(
                can_reach(&world, profile, Coordinate::new(0, 0), Coordinate::new(2, 1)),
                Ok(false)
            );
        }
    }

    #[test]
    fn giant_land_animal_sees_four_neighbours() {
        let world = Scenario::new("neighbours", 5, 5, 0).expect("scenario");
        let moves = possible_moves(&world, walker(1), Coordinate::new(2, 2));
        assert_eq!(
            moves,
            vec![
                Coordinate::new(2, 1),
                Coordinate::new(1, 2),
                Coordinate::new(3, 2),
                Coordinate::new(2, 3),
            ]
        );
    }

    #[test]
    fn straight_line_stops_at_obstacle() {
        let mut terrain = vec![TileType::Land; 25];
        terrain[2] = TileType::Ocean;
        let world = Scenario::with_terrain("line", 5, 5, 0, terrain).expect("scenario");
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 0), Coordinate::new(4, 0)),
            Ok(false)
        );
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 0), Coordinate::new(1, 0)),
            Ok(true)
        );
    }

    #[test]
    fn either_elbow_suffices() {
        let mut terrain = vec![TileType::Land; 25];
        // Blocks the horizontal-first elbow from (0,0) to (2,2) at (1,0).
        terrain[1] = TileType::Ocean;
        let world = Scenario::with_terrain("elbow", 5, 5, 0, terrain).expect("scenario");
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 0), Coordinate::new(2, 2)),
            Ok(true)
        );
    }

    #[test]
    fn detours_needing_two_bends_are_rejected() {
        let mut terrain = vec![TileType::Land; 25];
        // Walls off both elbows from (0,1) to (2,0); a longer route through row 2 stays open.
        terrain[1] = TileType::Ocean;
        terrain[6] = TileType::Ocean;
        let world = Scenario::with_terrain("detour", 5, 5, 0, terrain).expect("scenario");
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 1), Coordinate::new(2, 0)),
            Ok(false)
        );
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 1), Coordinate::new(2, 2)),
            Ok(true)
        );
    }

    #[test]
    fn occupants_block_transit() {
        let mut world = Scenario::new("blocked", 5, 5, 0).expect("scenario");
        let animal = Animal::new(Size::Small, TileType::Land).expect("land");
        let _ = world
            .place(EntityKind::Animal(animal), Coordinate::new(1, 0))
            .expect("placed");
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 0), Coordinate::new(2, 0)),
            Ok(false)
        );
        assert_eq!(
            can_reach(&world, walker(4), Coordinate::new(0, 0), Coordinate::new(1, 0)),
            Ok(false)
        );
    }
}
