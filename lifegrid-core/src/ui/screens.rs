//! Screen registry
//!
//! Screens are registered by id in arbitrary order and may be enabled or
//! disabled at any time. The enabled subset, in registration order, is the
//! cycle list the UI navigates.

use heapless::{String, Vec};

/// Maximum number of registered screens
pub const MAX_SCREENS: usize = 8;

/// Maximum screen name length in bytes
pub const MAX_NAME_LEN: usize = 16;

/// Display name of a screen
pub type ScreenName = String<MAX_NAME_LEN>;

/// Logical screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenId(pub u8);

impl ScreenId {
    pub const YEAR: ScreenId = ScreenId(0);
    pub const MONTH: ScreenId = ScreenId(1);
    pub const DAY: ScreenId = ScreenId(2);
    pub const HOUR: ScreenId = ScreenId(3);
    pub const HABITS: ScreenId = ScreenId(4);
    pub const LIFESPAN: ScreenId = ScreenId(5);
    pub const AUTOMATON: ScreenId = ScreenId(6);

    /// Built-in name for well-known ids
    pub fn default_name(self) -> &'static str {
        match self {
            ScreenId::YEAR => "Year",
            ScreenId::MONTH => "Month",
            ScreenId::DAY => "Day",
            ScreenId::HOUR => "Hour",
            ScreenId::HABITS => "Habits",
            ScreenId::LIFESPAN => "Life",
            ScreenId::AUTOMATON => "Conway",
            _ => "Screen",
        }
    }
}

/// Screen registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// No room for another screen
    Full,
}

/// A registered screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub id: ScreenId,
    pub enabled: bool,
    pub name: ScreenName,
}

/// Registered screens and the derived cycle list
#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    screens: Vec<Screen, MAX_SCREENS>,
    enabled: Vec<ScreenId, MAX_SCREENS>,
}

fn truncated(name: &str) -> ScreenName {
    let mut out = ScreenName::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl ScreenRegistry {
    pub const fn new() -> Self {
        Self {
            screens: Vec::new(),
            enabled: Vec::new(),
        }
    }

    /// Add a screen or update its enabled flag, keeping its name
    pub fn register(&mut self, id: ScreenId, enabled: bool) -> Result<(), RegistryError> {
        if let Some(screen) = self.screens.iter_mut().find(|s| s.id == id) {
            screen.enabled = enabled;
        } else {
            self.screens
                .push(Screen {
                    id,
                    enabled,
                    name: truncated(id.default_name()),
                })
                .map_err(|_| RegistryError::Full)?;
        }
        self.rebuild();
        Ok(())
    }

    /// Add or update a screen with a custom name (truncated to fit)
    pub fn register_named(
        &mut self,
        id: ScreenId,
        enabled: bool,
        name: &str,
    ) -> Result<(), RegistryError> {
        self.register(id, enabled)?;
        if let Some(screen) = self.screens.iter_mut().find(|s| s.id == id) {
            screen.name = truncated(name);
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        self.enabled.clear();
        for screen in self.screens.iter().filter(|s| s.enabled) {
            // Capacities match, so this cannot overflow
            let _ = self.enabled.push(screen.id);
        }
    }

    /// Enabled screen ids in registration order
    pub fn enabled(&self) -> &[ScreenId] {
        &self.enabled
    }

    /// Every registered screen
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Look up a screen
    pub fn get(&self, id: ScreenId) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    /// Position of `id` in the cycle list
    pub fn position(&self, id: ScreenId) -> Option<usize> {
        self.enabled.iter().position(|&e| e == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let mut registry = ScreenRegistry::new();
        registry.register(ScreenId::AUTOMATON, true).unwrap();
        registry.register(ScreenId::YEAR, true).unwrap();
        registry.register(ScreenId::DAY, false).unwrap();
        assert_eq!(registry.enabled(), &[ScreenId::AUTOMATON, ScreenId::YEAR]);
        assert_eq!(registry.screens().len(), 3);
    }

    #[test]
    fn test_update_keeps_slot() {
        let mut registry = ScreenRegistry::new();
        registry.register(ScreenId::YEAR, false).unwrap();
        registry.register(ScreenId::MONTH, true).unwrap();
        registry.register(ScreenId::YEAR, true).unwrap();
        assert_eq!(registry.enabled(), &[ScreenId::YEAR, ScreenId::MONTH]);
        assert_eq!(registry.position(ScreenId::MONTH), Some(1));
    }

    #[test]
    fn test_names() {
        let mut registry = ScreenRegistry::new();
        registry.register(ScreenId::AUTOMATON, true).unwrap();
        assert_eq!(registry.get(ScreenId::AUTOMATON).unwrap().name.as_str(), "Conway");

        registry
            .register_named(ScreenId::AUTOMATON, true, "A very long screen name")
            .unwrap();
        let name = &registry.get(ScreenId::AUTOMATON).unwrap().name;
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert_eq!(name.as_str(), "A very long scre");

        // Re-registering keeps the custom name
        registry.register(ScreenId::AUTOMATON, false).unwrap();
        assert!(registry.get(ScreenId::AUTOMATON).unwrap().name.starts_with("A very"));
    }

    #[test]
    fn test_full() {
        let mut registry = ScreenRegistry::new();
        for id in 0..MAX_SCREENS as u8 {
            registry.register(ScreenId(id), true).unwrap();
        }
        assert_eq!(registry.register(ScreenId(99), true), Err(RegistryError::Full));
        // Updating an existing screen still works
        assert!(registry.register(ScreenId(0), false).is_ok());
        assert_eq!(registry.enabled().len(), MAX_SCREENS - 1);
    }

    #[test]
    fn test_default_names() {
        assert_eq!(ScreenId::LIFESPAN.default_name(), "Life");
        assert_eq!(ScreenId(42).default_name(), "Screen");
    }
}
