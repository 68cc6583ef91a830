#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative scenario state management for the research simulation.
//!
//! A [`Scenario`] owns its tiles, the entities standing on them, the event
//! log, the registry of animals the scheduler may move, and a seeded random
//! source. Mutations flow exclusively through [`apply`]; everything else is
//! read through the [`query`] module.

mod codec;
mod log;
mod movement;
mod registry;

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use research_sim_core::{
    Command, Coordinate, EntityId, EntityKind, Event, GridDimensions, SimError, TileType,
};
use tracing::debug;

pub use log::EventLog;
pub use registry::ScenarioRegistry;

/// Single cell of the grid with its terrain and at most one occupant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    terrain: TileType,
    occupant: Option<Entity>,
}

impl Tile {
    /// Creates an empty tile with the given terrain.
    #[must_use]
    pub const fn new(terrain: TileType) -> Self {
        Self {
            terrain,
            occupant: None,
        }
    }

    /// Terrain of the tile.
    #[must_use]
    pub const fn terrain(&self) -> TileType {
        self.terrain
    }

    /// Entity currently standing on the tile, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<&Entity> {
        self.occupant.as_ref()
    }

    /// Reports whether an entity stands on the tile.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Entity hosted by a tile, tagged with its scenario-assigned identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    coordinate: Coordinate,
    kind: EntityKind,
}

impl Entity {
    /// Identifier assigned when the entity was placed.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Tile the entity currently stands on.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Variant and capabilities of the entity.
    #[must_use]
    pub const fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Machine-readable save line for the entity.
    #[must_use]
    pub fn encode(&self) -> String {
        self.kind.encode(self.coordinate)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.describe(self.coordinate))
    }
}

/// Live animals the scheduler is allowed to move, in placement order.
#[derive(Clone, Debug, Default)]
struct AnimalRegistry {
    animals: Vec<EntityId>,
}

impl AnimalRegistry {
    fn add(&mut self, animal: EntityId) {
        self.animals.push(animal);
    }

    fn remove(&mut self, animal: EntityId) {
        self.animals.retain(|registered| *registered != animal);
    }

    fn snapshot(&self) -> Vec<EntityId> {
        self.animals.clone()
    }
}

/// Represents one bounded research scenario and everything living in it.
#[derive(Debug)]
pub struct Scenario {
    name: String,
    dimensions: GridDimensions,
    seed: u64,
    tiles: Vec<Tile>,
    log: EventLog,
    animals: AnimalRegistry,
    rng: ChaCha8Rng,
    next_entity: u32,
}

impl Scenario {
    /// Creates a scenario covered entirely in land.
    pub fn new(name: impl Into<String>, width: u32, height: u32, seed: u64) -> Result<Self, SimError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SimError::InvalidDimensions(
                "scenario name must not be empty".to_owned(),
            ));
        }
        let dimensions = GridDimensions::new(width, height)?;
        Ok(Self {
            name,
            dimensions,
            seed,
            tiles: vec![Tile::new(TileType::Land); dimensions.tile_count()],
            log: EventLog::new(),
            animals: AnimalRegistry::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_entity: 0,
        })
    }

    /// Creates a scenario from a row-major terrain sequence covering every tile.
    pub fn with_terrain(
        name: impl Into<String>,
        width: u32,
        height: u32,
        seed: u64,
        terrain: Vec<TileType>,
    ) -> Result<Self, SimError> {
        let mut scenario = Self::new(name, width, height, seed)?;
        if terrain.len() != scenario.dimensions.tile_count() {
            return Err(SimError::InvalidDimensions(format!(
                "expected {} tiles, received {}",
                scenario.dimensions.tile_count(),
                terrain.len()
            )));
        }
        scenario.tiles = terrain.into_iter().map(Tile::new).collect();
        Ok(scenario)
    }

    /// Name of the scenario.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grid dimensions of the scenario.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Seed the random source was initialised with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the seed and restarts the random source from it.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Draws a uniformly distributed index below `bound` from the scenario's random source.
    ///
    /// Every call with a non-zero bound consumes exactly one draw, including a bound of one.
    pub fn draw_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    /// Replaces the terrain of a tile, keeping any occupant in place.
    pub fn set_terrain(&mut self, at: Coordinate, terrain: TileType) -> Result<(), SimError> {
        let index = at.to_index(self.dimensions)?;
        self.tiles[index].terrain = terrain;
        Ok(())
    }

    fn tile_at(&self, at: Coordinate) -> Option<&Tile> {
        self.dimensions
            .index_of(at)
            .and_then(|index| self.tiles.get(index))
    }

    fn tile_at_mut(&mut self, at: Coordinate) -> Option<&mut Tile> {
        self.dimensions
            .index_of(at)
            .and_then(|index| self.tiles.get_mut(index))
    }

    fn entity(&self, id: EntityId) -> Result<&Entity, SimError> {
        self.tiles
            .iter()
            .filter_map(Tile::occupant)
            .find(|entity| entity.id == id)
            .ok_or(SimError::UnknownEntity(id))
    }

    fn place(&mut self, kind: EntityKind, at: Coordinate) -> Result<EntityId, SimError> {
        let id = EntityId::new(self.next_entity);
        let tile = self.tile_at_mut(at).ok_or(SimError::OutOfBounds(at))?;
        if tile.is_occupied() {
            return Err(SimError::TileOccupied(at));
        }
        if !kind.permits_placement(tile.terrain) {
            return Err(SimError::IncompatibleTerrain {
                at,
                terrain: tile.terrain,
            });
        }

        let is_animal = matches!(kind, EntityKind::Animal(_));
        debug!(entity = %id, kind = kind.label(), %at, "entity_placed");
        tile.occupant = Some(Entity {
            id,
            coordinate: at,
            kind,
        });
        if is_animal {
            self.animals.add(id);
        }
        self.next_entity += 1;
        Ok(id)
    }

    fn record(&mut self, event: Event, out_events: &mut Vec<Event>) {
        self.log.append(event.clone());
        out_events.push(event);
    }

    fn move_entity(
        &mut self,
        id: EntityId,
        destination: Coordinate,
        out_events: &mut Vec<Event>,
    ) -> Result<(), SimError> {
        let mover = self.entity(id)?;
        let origin = mover.coordinate;
        let profile = mover.kind.move_profile().ok_or(SimError::NotMovable(id))?;
        if !movement::can_reach(self, profile, origin, destination)? {
            return Err(SimError::IllegalMove {
                entity: id,
                destination,
            });
        }

        let Some(mut mover) = self.tile_at_mut(origin).and_then(|tile| tile.occupant.take()) else {
            return Err(SimError::UnknownEntity(id));
        };
        let description = mover.to_string();
        mover.coordinate = destination;
        debug!(entity = %id, from = %origin, to = %destination, "entity_moved");
        self.record(
            Event::Moved {
                entity: id,
                description,
                from: origin,
                to: destination,
            },
            out_events,
        );

        if profile.collects_on_arrival {
            self.collect_occupant(&mover, destination, out_events);
        }

        match self.tile_at_mut(destination) {
            Some(tile) => tile.occupant = Some(mover),
            None => return Err(SimError::OutOfBounds(destination)),
        }
        Ok(())
    }

    fn collect(
        &mut self,
        actor: EntityId,
        target: Coordinate,
        out_events: &mut Vec<Event>,
    ) -> Result<(), SimError> {
        let collector = self.entity(actor)?.clone();
        if !matches!(collector.kind, EntityKind::Actor(_)) {
            return Err(SimError::NotAnActor(actor));
        }
        let tile = self.tile_at(target).ok_or(SimError::OutOfBounds(target))?;
        if !tile.is_occupied() {
            return Err(SimError::EmptyTile(target));
        }
        self.collect_occupant(&collector, target, out_events);
        Ok(())
    }

    /// Removes a collectable occupant from `target`, crediting `collector`.
    ///
    /// Occupants without the collectable capability are left untouched.
    fn collect_occupant(&mut self, collector: &Entity, target: Coordinate, out_events: &mut Vec<Event>) {
        let Some(tile) = self.tile_at_mut(target) else {
            return;
        };
        let Some(points) = tile.occupant().and_then(|occupant| occupant.kind.collection_points())
        else {
            return;
        };
        let Some(collected) = tile.occupant.take() else {
            return;
        };
        if matches!(collected.kind, EntityKind::Animal(_)) {
            self.animals.remove(collected.id);
        }

        debug!(actor = %collector.id, entity = %collected.id, points, "entity_collected");
        self.record(
            Event::Collected {
                actor: collector.id,
                actor_description: collector.to_string(),
                target_description: collected.to_string(),
                at: target,
                points,
            },
            out_events,
        );
    }
}

impl PartialEq for Scenario {
    /// Structural equality: name, dimensions, seed, terrain and occupants.
    ///
    /// Entity identifiers, the event log and the random stream position are ignored.
    fn eq(&self, other: &Self) -> bool {
        let occupant_shape = |tile: &Tile| {
            tile.occupant()
                .map(|entity| (entity.coordinate, entity.kind.clone()))
        };
        self.name == other.name
            && self.dimensions == other.dimensions
            && self.seed == other.seed
            && self.tiles.len() == other.tiles.len()
            && self.tiles.iter().zip(&other.tiles).all(|(ours, theirs)| {
                ours.terrain == theirs.terrain && occupant_shape(ours) == occupant_shape(theirs)
            })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entities = self.tiles.iter().filter(|tile| tile.is_occupied()).count();
        write!(
            f,
            "{}\nWidth: {}, Height: {}\nEntities: {entities}",
            self.name,
            self.dimensions.width(),
            self.dimensions.height()
        )
    }
}

/// Applies the provided command to the scenario, appending produced events to the log.
///
/// Events recorded while executing the command are also pushed onto
/// `out_events` so callers can react without diffing the log. A failed
/// command leaves the scenario untouched.
pub fn apply(
    world: &mut Scenario,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), SimError> {
    match command {
        Command::Place { kind, at } => world.place(kind, at).map(|_| ()),
        Command::Move {
            entity,
            destination,
        } => world.move_entity(entity, destination, out_events),
        Command::Collect { actor, target } => world.collect(actor, target, out_events),
    }
}

/// Query functions that provide read-only access to the scenario state.
pub mod query {
    use super::{movement, EventLog, Scenario, Tile};
    use crate::Entity;
    use research_sim_core::{Coordinate, EntityId, EntityKind, SimError};

    /// Returns the tile at the coordinate.
    pub fn tile(world: &Scenario, at: Coordinate) -> Result<&Tile, SimError> {
        world.tile_at(at).ok_or(SimError::OutOfBounds(at))
    }

    /// Returns the entity standing at the coordinate.
    pub fn occupant(world: &Scenario, at: Coordinate) -> Result<&Entity, SimError> {
        tile(world, at)?.occupant().ok_or(SimError::EmptyTile(at))
    }

    /// Looks up a live entity by identifier.
    pub fn entity(world: &Scenario, id: EntityId) -> Result<&Entity, SimError> {
        world.entity(id)
    }

    /// Copies the full row-major tile sequence.
    #[must_use]
    pub fn snapshot(world: &Scenario) -> Vec<Tile> {
        world.tiles.clone()
    }

    /// Copies the identifiers of every live animal the scheduler may move.
    #[must_use]
    pub fn animals(world: &Scenario) -> Vec<EntityId> {
        world.animals.snapshot()
    }

    /// Provides read-only access to the scenario's event log.
    #[must_use]
    pub fn log(world: &Scenario) -> &EventLog {
        &world.log
    }

    /// Total Manhattan distance covered by every recorded move.
    #[must_use]
    pub fn tiles_travelled(world: &Scenario) -> u32 {
        world.log.tiles_travelled()
    }

    /// Number of recorded collections.
    #[must_use]
    pub fn entities_collected(world: &Scenario) -> u32 {
        world.log.entities_collected()
    }

    /// Points accumulated through collections.
    #[must_use]
    pub fn points_earned(world: &Scenario) -> u32 {
        world.log.points_earned()
    }

    /// Reports whether the entity could legally move to `destination`.
    ///
    /// Fails with [`SimError::OutOfBounds`] when the destination lies outside the grid.
    pub fn can_reach(
        world: &Scenario,
        entity: EntityId,
        destination: Coordinate,
    ) -> Result<bool, SimError> {
        let mover = world.entity(entity)?;
        let profile = mover
            .kind()
            .move_profile()
            .ok_or(SimError::NotMovable(entity))?;
        movement::can_reach(world, profile, mover.coordinate(), destination)
    }

    /// Enumerates every legal destination of the entity in row-major scan order.
    pub fn possible_moves(world: &Scenario, entity: EntityId) -> Result<Vec<Coordinate>, SimError> {
        let mover = world.entity(entity)?;
        let profile = mover
            .kind()
            .move_profile()
            .ok_or(SimError::NotMovable(entity))?;
        Ok(movement::possible_moves(world, profile, mover.coordinate()))
    }

    /// Enumerates orthogonal neighbours of the actor hosting a collectable entity.
    pub fn possible_collections(
        world: &Scenario,
        actor: EntityId,
    ) -> Result<Vec<Coordinate>, SimError> {
        let collector = world.entity(actor)?;
        if !matches!(collector.kind(), EntityKind::Actor(_)) {
            return Err(SimError::NotAnActor(actor));
        }
        let origin = collector.coordinate();
        Ok([(0, -1), (-1, 0), (1, 0), (0, 1)]
            .into_iter()
            .map(|(dx, dy)| origin.translate(dx, dy))
            .filter(|neighbour| {
                world
                    .tile_at(*neighbour)
                    .and_then(Tile::occupant)
                    .is_some_and(|occupant| occupant.kind().is_collectable())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_sim_core::{Actor, Animal, Plant, Size};

    fn land(width: u32, height: u32) -> Scenario {
        Scenario::new("test", width, height, 0).expect("valid scenario")
    }

    fn place(world: &mut Scenario, kind: EntityKind, at: Coordinate) -> EntityId {
        apply(world, Command::Place { kind, at }, &mut Vec::new()).expect("placement succeeds");
        query::occupant(world, at).expect("placed entity").id()
    }

    #[test]
    fn new_rejects_bad_dimensions_and_names() {
        assert!(matches!(
            Scenario::new("tiny", 4, 5, 0),
            Err(SimError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Scenario::new("", 5, 5, 0),
            Err(SimError::InvalidDimensions(_))
        ));
        assert!(matches!(
            Scenario::with_terrain("short", 5, 5, 0, vec![TileType::Land; 24]),
            Err(SimError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn tiles_cover_the_full_grid() {
        let world = land(7, 9);
        assert_eq!(query::snapshot(&world).len(), 63);
        assert!(matches!(
            query::tile(&world, Coordinate::new(7, 0)),
            Err(SimError::OutOfBounds(_))
        ));
    }

    #[test]
    fn placement_registers_animals_only() {
        let mut world = land(5, 5);
        let animal = Animal::new(Size::Small, TileType::Land).expect("land animal");
        let dog = place(&mut world, EntityKind::Animal(animal), Coordinate::new(1, 1));
        let _ = place(
            &mut world,
            EntityKind::Plant(Plant::new(Size::Small)),
            Coordinate::new(2, 2),
        );
        assert_eq!(query::animals(&world), vec![dog]);
    }

    #[test]
    fn placement_enforces_occupancy_and_terrain() {
        let mut world = land(5, 5);
        world
            .set_terrain(Coordinate::new(0, 0), TileType::Ocean)
            .expect("in bounds");
        let plant = EntityKind::Plant(Plant::new(Size::Large));
        let result = apply(
            &mut world,
            Command::Place {
                kind: plant.clone(),
                at: Coordinate::new(0, 0),
            },
            &mut Vec::new(),
        );
        assert_eq!(
            result,
            Err(SimError::IncompatibleTerrain {
                at: Coordinate::new(0, 0),
                terrain: TileType::Ocean,
            })
        );

        let _ = place(&mut world, plant.clone(), Coordinate::new(1, 0));
        let result = apply(
            &mut world,
            Command::Place {
                kind: EntityKind::Actor(Actor::new("Ana")),
                at: Coordinate::new(1, 0),
            },
            &mut Vec::new(),
        );
        assert_eq!(result, Err(SimError::TileOccupied(Coordinate::new(1, 0))));
    }

    #[test]
    fn set_terrain_keeps_occupant() {
        let mut world = land(5, 5);
        let at = Coordinate::new(3, 3);
        let _ = place(&mut world, EntityKind::Plant(Plant::new(Size::Small)), at);
        world.set_terrain(at, TileType::Sand).expect("in bounds");
        let tile = query::tile(&world, at).expect("tile");
        assert_eq!(tile.terrain(), TileType::Sand);
        assert!(tile.is_occupied());
        assert_eq!(
            world.set_terrain(Coordinate::new(5, 0), TileType::Sand),
            Err(SimError::OutOfBounds(Coordinate::new(5, 0)))
        );
    }

    #[test]
    fn draws_are_reproducible_for_a_seed() {
        let mut first = land(5, 5);
        let mut second = land(5, 5);
        let first_draws: Vec<usize> = (0..16).map(|_| first.draw_index(7)).collect();
        let second_draws: Vec<usize> = (0..16).map(|_| second.draw_index(7)).collect();
        assert_eq!(first_draws, second_draws);
        assert!(first_draws.iter().all(|draw| *draw < 7));
    }

    #[test]
    fn summary_counts_entities() {
        let mut world = land(6, 5);
        let _ = place(
            &mut world,
            EntityKind::Actor(Actor::new("Ana")),
            Coordinate::new(0, 0),
        );
        assert_eq!(world.to_string(), "test\nWidth: 6, Height: 5\nEntities: 1");
    }
}
