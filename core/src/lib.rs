#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the research simulation.
//!
//! This crate defines the value types that connect adapters, the
//! authoritative scenario, and the scheduling systems. Adapters submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and appends [`Event`] records to the
//! scenario log. Every type here is a plain value: coordinates are interpreted
//! against an explicit [`GridDimensions`] rather than any ambient state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest permitted width or height of a scenario grid.
pub const MIN_GRID_SIZE: u32 = 5;
/// Largest permitted width or height of a scenario grid.
pub const MAX_GRID_SIZE: u32 = 15;
/// Dimension substituted when a save file declares `-1`.
pub const DEFAULT_GRID_SIZE: u32 = 5;
/// Seed substituted when a save file declares `-1`.
pub const DEFAULT_SEED: u64 = 0;
/// Maximum number of tiles an actor may travel in a single move.
pub const ACTOR_MOVE_DISTANCE: u32 = 4;

/// Failures surfaced by scenario construction, movement, collection and decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The scenario could not be constructed with the requested name or dimensions.
    #[error("invalid scenario dimensions: {0}")]
    InvalidDimensions(String),
    /// The coordinate lies outside the grid in scope.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coordinate),
    /// The tile at the coordinate has no occupant.
    #[error("tile {0} is empty")]
    EmptyTile(Coordinate),
    /// Save text violated the grammar or the placement rules.
    #[error("bad save format: {0}")]
    BadSaveFormat(String),
    /// Animals may only live on land or in the ocean.
    #[error("{0} is not a valid animal habitat")]
    InvalidHabitat(TileType),
    /// The tile at the coordinate already hosts an entity.
    #[error("tile {0} is already occupied")]
    TileOccupied(Coordinate),
    /// The entity cannot be placed on the terrain at the coordinate.
    #[error("terrain {terrain} at {at} cannot host this entity")]
    IncompatibleTerrain {
        /// Coordinate of the rejected tile.
        at: Coordinate,
        /// Terrain found at the coordinate.
        terrain: TileType,
    },
    /// No live entity carries the identifier.
    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),
    /// The entity has no movement capability.
    #[error("entity {0} cannot move")]
    NotMovable(EntityId),
    /// Only actors may collect other entities.
    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),
    /// A move was requested towards a destination that is not reachable.
    #[error("entity {entity} cannot reach {destination}")]
    IllegalMove {
        /// Entity that requested the move.
        entity: EntityId,
        /// Destination that failed validation.
        destination: Coordinate,
    },
    /// No scenario with the given name has been registered.
    #[error("no scenario named '{0}' is loaded")]
    UnknownScenario(String),
}

/// Width and height of a scenario grid, validated against the permitted range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    width: u32,
    height: u32,
}

impl GridDimensions {
    /// Creates grid dimensions, rejecting values outside `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        let range = MIN_GRID_SIZE..=MAX_GRID_SIZE;
        if !range.contains(&width) {
            return Err(SimError::InvalidDimensions(format!(
                "width {width} must lie within {MIN_GRID_SIZE}..={MAX_GRID_SIZE}"
            )));
        }
        if !range.contains(&height) {
            return Err(SimError::InvalidDimensions(format!(
                "height {height} must lie within {MIN_GRID_SIZE}..={MAX_GRID_SIZE}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of tiles in the grid.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reports whether the coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && (coordinate.x as u32) < self.width
            && (coordinate.y as u32) < self.height
    }

    /// Row-major tile index of the coordinate, if it lies inside the grid.
    #[must_use]
    pub fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        if !self.contains(coordinate) {
            return None;
        }
        let column = usize::try_from(coordinate.x).ok()?;
        let row = usize::try_from(coordinate.y).ok()?;
        Some(column + row * self.width as usize)
    }
}

/// Location of a tile expressed as signed column and row offsets.
///
/// Coordinates are plain values and may point outside any grid; bounds are
/// only meaningful relative to a [`GridDimensions`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Creates a coordinate from its column and row.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Resolves a row-major tile index back into a coordinate.
    pub fn from_index(index: usize, dimensions: GridDimensions) -> Result<Self, SimError> {
        let width = dimensions.width() as usize;
        let x = (index % width) as i32;
        let y = (index / width) as i32;
        let coordinate = Self::new(x, y);
        if index >= dimensions.tile_count() {
            return Err(SimError::OutOfBounds(coordinate));
        }
        Ok(coordinate)
    }

    /// Zero-based column.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Row-major tile index of the coordinate within the grid.
    pub fn to_index(self, dimensions: GridDimensions) -> Result<usize, SimError> {
        dimensions
            .index_of(self)
            .ok_or(SimError::OutOfBounds(self))
    }

    /// Reports whether the coordinate lies inside the grid.
    #[must_use]
    pub fn is_in_bounds(self, dimensions: GridDimensions) -> bool {
        dimensions.contains(self)
    }

    /// Component-wise offset from `self` to `other`.
    #[must_use]
    pub const fn distance(self, other: Coordinate) -> Coordinate {
        Coordinate::new(other.x - self.x, other.y - self.y)
    }

    /// Computes the Manhattan distance between two coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the coordinate shifted by the provided offsets.
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Encodes the coordinate as `x,y`.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Decodes a coordinate from exactly two comma-separated integers.
    pub fn decode(text: &str) -> Result<Self, SimError> {
        let mut parts = text.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SimError::BadSaveFormat(format!(
                "coordinate '{text}' must contain exactly two values"
            )));
        };
        let parse = |value: &str| {
            value.parse::<i32>().map_err(|_| {
                SimError::BadSaveFormat(format!("coordinate '{text}' is not numeric"))
            })
        };
        Ok(Self::new(parse(x)?, parse(y)?))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Terrain assigned to a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// Open ground, encoded as `L`.
    Land,
    /// Deep water, encoded as `O`.
    Ocean,
    /// Beach, encoded as `S`.
    Sand,
    /// Impassable for actors, encoded as `X`.
    Mountain,
}

impl TileType {
    /// Every terrain in declaration order.
    pub const ALL: [TileType; 4] = [Self::Land, Self::Ocean, Self::Sand, Self::Mountain];

    /// Single-character map encoding.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Land => 'L',
            Self::Ocean => 'O',
            Self::Sand => 'S',
            Self::Mountain => 'X',
        }
    }

    /// Decodes a map character.
    pub fn from_symbol(symbol: char) -> Result<Self, SimError> {
        Self::ALL
            .into_iter()
            .find(|terrain| terrain.symbol() == symbol)
            .ok_or_else(|| SimError::BadSaveFormat(format!("unknown terrain symbol '{symbol}'")))
    }

    /// Upper-case name used by entity encodings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Land => "LAND",
            Self::Ocean => "OCEAN",
            Self::Sand => "SAND",
            Self::Mountain => "MOUNTAIN",
        }
    }

    /// Decodes an upper-case terrain name.
    pub fn from_label(label: &str) -> Result<Self, SimError> {
        Self::ALL
            .into_iter()
            .find(|terrain| terrain.label() == label)
            .ok_or_else(|| SimError::BadSaveFormat(format!("unknown terrain '{label}'")))
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Terrain category an animal is restricted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Habitat {
    /// Lives on any terrain other than ocean.
    Land,
    /// Lives exclusively in the ocean.
    Ocean,
}

impl Habitat {
    /// Terrain that names this habitat.
    #[must_use]
    pub const fn terrain(self) -> TileType {
        match self {
            Self::Land => TileType::Land,
            Self::Ocean => TileType::Ocean,
        }
    }

    /// Reports whether an animal of this habitat may stand on the terrain.
    #[must_use]
    pub const fn permits(self, terrain: TileType) -> bool {
        match self {
            Self::Land => !matches!(terrain, TileType::Ocean),
            Self::Ocean => matches!(terrain, TileType::Ocean),
        }
    }
}

impl TryFrom<TileType> for Habitat {
    type Error = SimError;

    fn try_from(terrain: TileType) -> Result<Self, Self::Error> {
        match terrain {
            TileType::Land => Ok(Self::Land),
            TileType::Ocean => Ok(Self::Ocean),
            other => Err(SimError::InvalidHabitat(other)),
        }
    }
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terrain().label())
    }
}

/// Size class of an entity, which fixes its point value and travel range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    /// Smallest class.
    Small,
    /// Medium class; actors are always medium.
    Medium,
    /// Large class.
    Large,
    /// Largest class.
    Giant,
}

impl Size {
    /// Every size in ascending order.
    pub const ALL: [Size; 4] = [Self::Small, Self::Medium, Self::Large, Self::Giant];

    /// Points awarded for collecting an entity of this size.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Small => 1,
            Self::Medium => 10,
            Self::Large => 25,
            Self::Giant => 75,
        }
    }

    /// Maximum Manhattan distance an animal of this size travels per move.
    #[must_use]
    pub const fn move_distance(self) -> u32 {
        match self {
            Self::Small => 4,
            Self::Medium => 3,
            Self::Large => 2,
            Self::Giant => 1,
        }
    }

    /// Upper-case name used by entity encodings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
            Self::Giant => "GIANT",
        }
    }

    /// Decodes an upper-case size name.
    pub fn from_label(label: &str) -> Result<Self, SimError> {
        Self::ALL
            .into_iter()
            .find(|size| size.label() == label)
            .ok_or_else(|| SimError::BadSaveFormat(format!("unknown size '{label}'")))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique identifier assigned to an entity by its scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stationary, collectable vegetation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plant {
    size: Size,
}

impl Plant {
    /// Creates a plant of the given size.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    /// Size class of the plant.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Species name derived from the size.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.size {
            Size::Small => "Flower",
            Size::Medium => "Shrub",
            Size::Large => "Sapling",
            Size::Giant => "Tree",
        }
    }
}

/// Mobile, collectable wildlife bound to a habitat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    size: Size,
    habitat: Habitat,
}

impl Animal {
    /// Creates an animal, rejecting habitats other than land or ocean.
    pub fn new(size: Size, habitat: TileType) -> Result<Self, SimError> {
        Ok(Self {
            size,
            habitat: Habitat::try_from(habitat)?,
        })
    }

    /// Size class of the animal.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Habitat the animal is restricted to.
    #[must_use]
    pub const fn habitat(&self) -> Habitat {
        self.habitat
    }

    /// Species name derived from the size and habitat.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match (self.habitat, self.size) {
            (Habitat::Land, Size::Small) => "Mouse",
            (Habitat::Land, Size::Medium) => "Dog",
            (Habitat::Land, Size::Large) => "Horse",
            (Habitat::Land, Size::Giant) => "Elephant",
            (Habitat::Ocean, Size::Small) => "Crab",
            (Habitat::Ocean, Size::Medium) => "Fish",
            (Habitat::Ocean, Size::Large) => "Shark",
            (Habitat::Ocean, Size::Giant) => "Whale",
        }
    }
}

/// Player-controlled researcher that moves and collects.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    name: String,
}

impl Actor {
    /// Creates an actor with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name of the actor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Terrain restriction applied while validating movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerrainRule {
    /// Restricted to the habitat of an animal.
    Habitat(Habitat),
    /// Walks anywhere except ocean and mountains.
    OnFoot,
}

impl TerrainRule {
    /// Reports whether a mover bound by this rule may stand on the terrain.
    #[must_use]
    pub const fn permits(self, terrain: TileType) -> bool {
        match self {
            Self::Habitat(habitat) => habitat.permits(terrain),
            Self::OnFoot => !matches!(terrain, TileType::Ocean | TileType::Mountain),
        }
    }
}

/// Movement capability of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveProfile {
    /// Largest Manhattan distance covered by one move.
    pub max_distance: u32,
    /// Terrain the mover may pass over and stop on.
    pub terrain: TerrainRule,
    /// Whether the mover may end a move on a collectable occupant and collect it.
    pub collects_on_arrival: bool,
}

/// Capability-tagged entity variants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Encoded as `Flora`.
    Plant(Plant),
    /// Encoded as `Fauna`.
    Animal(Animal),
    /// Encoded as `User`.
    Actor(Actor),
}

impl EntityKind {
    /// Size class; actors are always medium.
    #[must_use]
    pub const fn size(&self) -> Size {
        match self {
            Self::Plant(plant) => plant.size(),
            Self::Animal(animal) => animal.size(),
            Self::Actor(_) => Size::Medium,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plant(plant) => plant.name(),
            Self::Animal(animal) => animal.name(),
            Self::Actor(actor) => actor.name(),
        }
    }

    /// Kind label used by encodings and renderings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Plant(_) => "Flora",
            Self::Animal(_) => "Fauna",
            Self::Actor(_) => "User",
        }
    }

    /// Points awarded on collection, or `None` when the entity is not collectable.
    #[must_use]
    pub const fn collection_points(&self) -> Option<u32> {
        match self {
            Self::Plant(plant) => Some(plant.size().points()),
            Self::Animal(animal) => Some(animal.size().points()),
            Self::Actor(_) => None,
        }
    }

    /// Reports whether an actor may collect this entity.
    #[must_use]
    pub const fn is_collectable(&self) -> bool {
        self.collection_points().is_some()
    }

    /// Movement capability, or `None` for stationary entities.
    #[must_use]
    pub const fn move_profile(&self) -> Option<MoveProfile> {
        match self {
            Self::Plant(_) => None,
            Self::Animal(animal) => Some(MoveProfile {
                max_distance: animal.size().move_distance(),
                terrain: TerrainRule::Habitat(animal.habitat()),
                collects_on_arrival: false,
            }),
            Self::Actor(_) => Some(MoveProfile {
                max_distance: ACTOR_MOVE_DISTANCE,
                terrain: TerrainRule::OnFoot,
                collects_on_arrival: true,
            }),
        }
    }

    /// Reports whether the entity may be placed on the terrain.
    #[must_use]
    pub const fn permits_placement(&self, terrain: TileType) -> bool {
        match self {
            Self::Plant(_) => !matches!(terrain, TileType::Ocean),
            Self::Animal(animal) => animal.habitat().permits(terrain),
            Self::Actor(_) => TerrainRule::OnFoot.permits(terrain),
        }
    }

    /// Renders `<name> [<Kind>] at (<x>,<y>)`, with animals appending their habitat.
    #[must_use]
    pub fn describe(&self, at: Coordinate) -> String {
        let base = format!("{} [{}] at {at}", self.name(), self.label());
        match self {
            Self::Animal(animal) => format!("{base} [{}]", animal.habitat()),
            _ => base,
        }
    }

    /// Machine-readable encoding of the entity standing at `at`.
    #[must_use]
    pub fn encode(&self, at: Coordinate) -> String {
        match self {
            Self::Plant(plant) => format!("Flora-{}-{}", plant.size(), at.encode()),
            Self::Animal(animal) => format!(
                "Fauna-{}-{}-{}",
                animal.size(),
                at.encode(),
                animal.habitat()
            ),
            Self::Actor(actor) => format!("User-{}-{}", at.encode(), actor.name()),
        }
    }

    /// Decodes an entity line, returning the variant and its coordinate.
    pub fn decode(line: &str) -> Result<(Self, Coordinate), SimError> {
        let fields: Vec<&str> = line.split('-').collect();
        let wrong_count = || SimError::BadSaveFormat(format!("entity '{line}' has wrong field count"));
        match fields.as_slice() {
            ["User", rest @ ..] => {
                let [coordinate, name] = rest else {
                    return Err(wrong_count());
                };
                Ok((Self::Actor(Actor::new(*name)), Coordinate::decode(coordinate)?))
            }
            ["Fauna", rest @ ..] => {
                let [size, coordinate, habitat] = rest else {
                    return Err(wrong_count());
                };
                let habitat = TileType::from_label(habitat)?;
                let animal = Animal::new(Size::from_label(size)?, habitat)
                    .map_err(|error| SimError::BadSaveFormat(error.to_string()))?;
                Ok((Self::Animal(animal), Coordinate::decode(coordinate)?))
            }
            ["Flora", rest @ ..] => {
                let [size, coordinate] = rest else {
                    return Err(wrong_count());
                };
                let plant = Plant::new(Size::from_label(size)?);
                Ok((Self::Plant(plant), Coordinate::decode(coordinate)?))
            }
            _ => Err(SimError::BadSaveFormat(format!(
                "entity '{line}' has an unknown kind"
            ))),
        }
    }
}

/// Commands that express all permissible scenario mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Places a new entity onto an empty, compatible tile.
    Place {
        /// Entity variant to create.
        kind: EntityKind,
        /// Tile that will host the entity.
        at: Coordinate,
    },
    /// Moves a mobile entity along a validated path.
    Move {
        /// Identifier of the mover.
        entity: EntityId,
        /// Tile the mover should end on.
        destination: Coordinate,
    },
    /// Has an actor collect the occupant of a tile.
    Collect {
        /// Identifier of the collecting actor.
        actor: EntityId,
        /// Tile whose occupant is collected.
        target: Coordinate,
    },
}

/// Immutable records appended to the scenario event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that an entity moved between two tiles.
    Moved {
        /// Identifier of the entity that moved.
        entity: EntityId,
        /// Rendering of the entity captured before the move.
        description: String,
        /// Tile the entity occupied before moving.
        from: Coordinate,
        /// Tile the entity occupies after the move.
        to: Coordinate,
    },
    /// Confirms that an actor collected an entity.
    Collected {
        /// Identifier of the collecting actor.
        actor: EntityId,
        /// Rendering of the actor at the time of collection.
        actor_description: String,
        /// Rendering of the collected entity.
        target_description: String,
        /// Tile the collected entity occupied.
        at: Coordinate,
        /// Points awarded for the collection.
        points: u32,
    },
}

impl Event {
    /// Coordinate the event concluded at.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Self::Moved { to, .. } => *to,
            Self::Collected { at, .. } => *at,
        }
    }

    /// Coordinate the event started from.
    #[must_use]
    pub const fn original_coordinate(&self) -> Coordinate {
        match self {
            Self::Moved { from, .. } => *from,
            Self::Collected { at, .. } => *at,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved {
                description, to, ..
            } => write!(f, "{description}\nMOVED TO {to}\n-----"),
            Self::Collected {
                actor_description,
                target_description,
                ..
            } => write!(
                f,
                "{actor_description}\nCOLLECTED\n{target_description}\n-----"
            ),
        }
    }
}
