//! Model registry for automatic front-end discovery.
//!
//! Each model self-registers via [`inventory::submit!`] with a
//! [`ModelEntry`] holding its CLI name, a one-line description and a factory
//! function. The front-end lists and selects models at runtime without any
//! central table.

use ttsim_core::core::HardwareModel;

/// Describes a selectable hardware model.
pub struct ModelEntry {
    /// CLI name used to select this model (e.g., "padtest").
    pub name: &'static str,
    /// Shown by `--list`.
    pub description: &'static str,
    /// Factory: construct a fresh model with its pins at their idle levels.
    pub create: fn() -> Box<dyn HardwareModel>,
}

impl ModelEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        create: fn() -> Box<dyn HardwareModel>,
    ) -> Self {
        Self {
            name,
            description,
            create,
        }
    }
}

inventory::collect!(ModelEntry);

/// Return all registered models, sorted by name.
pub fn all() -> Vec<&'static ModelEntry> {
    let mut entries: Vec<_> = inventory::iter::<ModelEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a model by its CLI name.
pub fn find(name: &str) -> Option<&'static ModelEntry> {
    inventory::iter::<ModelEntry>
        .into_iter()
        .find(|e| e.name == name)
}
