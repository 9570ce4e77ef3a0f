use crate::config::GameConfig;
use crate::nation::NationCollection;

/// Static inputs of a day advance. Never serialized with the snapshot.
#[derive(Clone, Copy)]
pub struct SimulationContext<'a> {
    pub nations: &'a NationCollection,
    pub config: &'a GameConfig,
}

impl<'a> SimulationContext<'a> {
    pub fn new(nations: &'a NationCollection, config: &'a GameConfig) -> Self {
        SimulationContext { nations, config }
    }
}
