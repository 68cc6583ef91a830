//! Line-oriented save format for scenarios.
//!
//! ```text
//! <name>
//! Width:<w>
//! Height:<h>
//! Seed:<seed>
//! <'=' repeated w times>
//! <h rows of w terrain symbols>
//! <'=' repeated w times>
//! <entity line>*
//! ```

use research_sim_core::{
    Coordinate, EntityKind, SimError, TileType, DEFAULT_GRID_SIZE, DEFAULT_SEED, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
use tracing::{info, warn};

use crate::Scenario;

const SEPARATOR: char = '=';
/// Header value that selects the default dimension or seed.
const DEFAULT_MARKER: &str = "-1";

impl Scenario {
    /// Encodes the scenario into its textual save format.
    ///
    /// Entity lines follow row-major tile order and the output carries no
    /// trailing newline.
    #[must_use]
    pub fn encode(&self) -> String {
        let width = self.dimensions.width() as usize;
        let separator = SEPARATOR.to_string().repeat(width);
        let mut lines = vec![
            self.name.clone(),
            format!("Width:{}", self.dimensions.width()),
            format!("Height:{}", self.dimensions.height()),
            format!("Seed:{}", self.seed),
            separator.clone(),
        ];
        lines.extend(
            self.tiles
                .chunks(width)
                .map(|row| row.iter().map(|tile| tile.terrain().symbol()).collect()),
        );
        lines.push(separator);
        lines.extend(
            self.tiles
                .iter()
                .filter_map(|tile| tile.occupant())
                .map(|entity| entity.encode()),
        );
        lines.join("\n")
    }

    /// Decodes a scenario from its textual save format.
    ///
    /// Any grammar or placement violation fails with [`SimError::BadSaveFormat`]
    /// and no scenario is produced.
    pub fn decode(text: &str) -> Result<Self, SimError> {
        match decode_scenario(text) {
            Ok(scenario) => {
                info!(
                    name = scenario.name(),
                    width = scenario.dimensions.width(),
                    height = scenario.dimensions.height(),
                    seed = scenario.seed,
                    "scenario_decoded"
                );
                Ok(scenario)
            }
            Err(error) => {
                warn!(%error, "scenario_decode_rejected");
                Err(error)
            }
        }
    }
}

fn decode_scenario(text: &str) -> Result<Scenario, SimError> {
    let mut lines = text.lines();

    let name = next_line(&mut lines, "name")?;
    if name.is_empty() {
        return Err(bad_save("scenario name is empty"));
    }
    let width = parse_dimension(header(&mut lines, "Width")?, "Width")?;
    let height = parse_dimension(header(&mut lines, "Height")?, "Height")?;
    let seed = parse_seed(header(&mut lines, "Seed")?)?;

    let separator = SEPARATOR.to_string().repeat(width as usize);
    expect_separator(&mut lines, &separator)?;

    let mut terrain = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height {
        let line = next_line(&mut lines, "map row")?;
        if line.chars().count() != width as usize {
            return Err(bad_save(format!(
                "map row {row} has length {}, expected {width}",
                line.chars().count()
            )));
        }
        for symbol in line.chars() {
            terrain.push(TileType::from_symbol(symbol)?);
        }
    }
    expect_separator(&mut lines, &separator)?;

    let mut scenario =
        Scenario::with_terrain(name, width, height, seed, terrain).map_err(into_bad_save)?;
    for line in lines {
        let (kind, at) = EntityKind::decode(line)?;
        place_decoded(&mut scenario, kind, at)?;
    }
    Ok(scenario)
}

fn place_decoded(scenario: &mut Scenario, kind: EntityKind, at: Coordinate) -> Result<(), SimError> {
    scenario
        .place(kind, at)
        .map(|_| ())
        .map_err(into_bad_save)
}

fn next_line<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    expected: &str,
) -> Result<&'a str, SimError> {
    lines
        .next()
        .ok_or_else(|| bad_save(format!("missing {expected}")))
}

fn header<'a>(lines: &mut impl Iterator<Item = &'a str>, key: &str) -> Result<&'a str, SimError> {
    let line = next_line(lines, key)?;
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| bad_save(format!("expected '{key}:' header, found '{line}'")))
}

fn parse_dimension(value: &str, key: &str) -> Result<u32, SimError> {
    if value == DEFAULT_MARKER {
        return Ok(DEFAULT_GRID_SIZE);
    }
    let parsed = value
        .parse::<u32>()
        .map_err(|_| bad_save(format!("{key} '{value}' is not a valid size")))?;
    let range = MIN_GRID_SIZE..=MAX_GRID_SIZE;
    if !range.contains(&parsed) {
        return Err(bad_save(format!("{key} {parsed} is outside {range:?}")));
    }
    Ok(parsed)
}

fn parse_seed(value: &str) -> Result<u64, SimError> {
    if value == DEFAULT_MARKER {
        return Ok(DEFAULT_SEED);
    }
    value
        .parse::<u64>()
        .map_err(|_| bad_save(format!("seed '{value}' is not valid")))
}

fn expect_separator<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    separator: &str,
) -> Result<(), SimError> {
    let line = next_line(lines, "separator")?;
    if line != separator {
        return Err(bad_save(format!("expected separator '{separator}', found '{line}'")));
    }
    Ok(())
}

fn bad_save(reason: impl Into<String>) -> SimError {
    SimError::BadSaveFormat(reason.into())
}

fn into_bad_save(error: SimError) -> SimError {
    match error {
        SimError::BadSaveFormat(_) => error,
        other => bad_save(other.to_string()),
    }
}
