//! Append-only event log with incrementally maintained statistics.

use std::fmt;

use research_sim_core::Event;

/// Ordered record of every move and collection in a scenario.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
    tiles_travelled: u32,
    entities_collected: u32,
    points_earned: u32,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and folds it into the running statistics.
    ///
    /// Collection points travel with the event itself, so appending never
    /// consults the tile the collected entity used to occupy.
    pub fn append(&mut self, event: Event) {
        match &event {
            Event::Moved { from, to, .. } => {
                self.tiles_travelled = self
                    .tiles_travelled
                    .saturating_add(from.manhattan_distance(*to));
            }
            Event::Collected { points, .. } => {
                self.entities_collected = self.entities_collected.saturating_add(1);
                self.points_earned = self.points_earned.saturating_add(*points);
            }
        }
        self.events.push(event);
    }

    /// Events in the order they were appended.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Reports whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total Manhattan distance covered by recorded moves.
    #[must_use]
    pub const fn tiles_travelled(&self) -> u32 {
        self.tiles_travelled
    }

    /// Number of recorded collections.
    #[must_use]
    pub const fn entities_collected(&self) -> u32 {
        self.entities_collected
    }

    /// Points accumulated by recorded collections.
    #[must_use]
    pub const fn points_earned(&self) -> u32 {
        self.points_earned
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, event) in self.events.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}
