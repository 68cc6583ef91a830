//! Named collection of loaded scenarios with a single active selection.

use research_sim_core::SimError;
use tracing::info;

use crate::Scenario;

/// Scenarios loaded during a session, keyed by name in load order.
#[derive(Debug, Default)]
pub struct ScenarioRegistry {
    scenarios: Vec<Scenario>,
    active: Option<usize>,
}

impl ScenarioRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes save text, registers the scenario and makes it active.
    ///
    /// A decode failure leaves the registry unchanged.
    pub fn load(&mut self, text: &str) -> Result<&mut Scenario, SimError> {
        let scenario = Scenario::decode(text)?;
        let index = self.insert(scenario);
        Ok(&mut self.scenarios[index])
    }

    /// Registers a scenario, replacing any scenario with the same name, and makes it active.
    pub fn register(&mut self, scenario: Scenario) {
        let _ = self.insert(scenario);
    }

    /// Makes the named scenario active.
    pub fn select(&mut self, name: &str) -> Result<(), SimError> {
        let index = self
            .position(name)
            .ok_or_else(|| SimError::UnknownScenario(name.to_owned()))?;
        self.active = Some(index);
        Ok(())
    }

    /// Currently active scenario, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Scenario> {
        self.active.and_then(|index| self.scenarios.get(index))
    }

    /// Mutable access to the currently active scenario, if any.
    pub fn active_mut(&mut self) -> Option<&mut Scenario> {
        self.active.and_then(|index| self.scenarios.get_mut(index))
    }

    /// Looks up a scenario by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.position(name).map(|index| &self.scenarios[index])
    }

    /// Names of every registered scenario in load order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(Scenario::name).collect()
    }

    /// Number of registered scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Reports whether no scenario has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Forgets every registered scenario.
    pub fn clear(&mut self) {
        self.scenarios.clear();
        self.active = None;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.scenarios
            .iter()
            .position(|scenario| scenario.name() == name)
    }

    fn insert(&mut self, scenario: Scenario) -> usize {
        info!(name = scenario.name(), "scenario_registered");
        let index = match self.position(scenario.name()) {
            Some(index) => {
                self.scenarios[index] = scenario;
                index
            }
            None => {
                self.scenarios.push(scenario);
                self.scenarios.len() - 1
            }
        };
        self.active = Some(index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOREST: &str = "Forest\nWidth:5\nHeight:5\nSeed:1\n=====\n\
        LLLLL\nLLLLL\nLLLLL\nLLLLL\nLLLLL\n=====\nFlora-SMALL-0,0";
    const REEF: &str = "Reef\nWidth:5\nHeight:5\nSeed:2\n=====\n\
        OOOOO\nOOOOO\nOOOOO\nOOOOO\nOOOOO\n=====";

    #[test]
    fn load_registers_and_activates() {
        let mut registry = ScenarioRegistry::new();
        let _ = registry.load(FOREST).expect("forest loads");
        let _ = registry.load(REEF).expect("reef loads");
        assert_eq!(registry.names(), vec!["Forest", "Reef"]);
        assert_eq!(registry.active().map(Scenario::name), Some("Reef"));

        registry.select("Forest").expect("forest registered");
        assert_eq!(registry.active().map(Scenario::name), Some("Forest"));
    }

    #[test]
    fn failed_load_registers_nothing() {
        let mut registry = ScenarioRegistry::new();
        let broken = FOREST.replacen("Flora-SMALL-0,0", "Flora-SMALL-9,9", 1);
        assert!(matches!(
            registry.load(&broken),
            Err(SimError::BadSaveFormat(_))
        ));
        assert!(registry.is_empty());
        assert!(registry.active().is_none());
    }

    #[test]
    fn reloading_a_name_replaces_it() {
        let mut registry = ScenarioRegistry::new();
        let _ = registry.load(FOREST).expect("forest loads");
        let replacement = FOREST.replacen("Seed:1", "Seed:9", 1);
        let _ = registry.load(&replacement).expect("replacement loads");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Forest").map(Scenario::seed), Some(9));
    }

    #[test]
    fn selecting_unknown_name_fails() {
        let mut registry = ScenarioRegistry::new();
        assert_eq!(
            registry.select("Nowhere"),
            Err(SimError::UnknownScenario("Nowhere".to_owned()))
        );
        registry.register(Scenario::new("Manual", 5, 5, 0).expect("scenario"));
        assert!(registry.active_mut().is_some());
        registry.clear();
        assert!(registry.active().is_none());
    }
}
