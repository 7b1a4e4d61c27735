//! The fleet roster: a registration-ordered collection of [`Agv`]s.

use agvsim_core::AgvId;

use crate::{Agv, FleetError};

/// All AGVs in the simulation, in stable registration order.
///
/// A plain `Vec` rather than a `HashMap`, deliberately: dispatch-rule
/// iteration order determines move-log order, and a `Vec` walked
/// front-to-back gives the same order on every run. Lookup by id is O(n),
/// acceptable for fleets of the domain's size (tens of AGVs).
pub struct Fleet {
    agvs: Vec<Agv>,
}

impl Fleet {
    pub fn new(agvs: Vec<Agv>) -> Self {
        Self { agvs }
    }

    pub fn len(&self) -> usize {
        self.agvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agvs.is_empty()
    }

    /// All AGVs, in fleet-registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Agv> {
        self.agvs.iter()
    }

    /// All AGVs, mutably, in fleet-registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agv> {
        self.agvs.iter_mut()
    }

    pub fn get(&self, id: &AgvId) -> Option<&Agv> {
        self.agvs.iter().find(|a| a.id() == id)
    }

    pub fn get_mut(&mut self, id: &AgvId) -> Option<&mut Agv> {
        self.agvs.iter_mut().find(|a| a.id() == id)
    }

    /// [`Fleet::get_mut`], failing with [`FleetError::UnknownAgv`] instead of
    /// returning `None`.
    pub fn get_mut_or_err(&mut self, id: &AgvId) -> Result<&mut Agv, FleetError> {
        self.get_mut(id).ok_or_else(|| FleetError::UnknownAgv(id.clone()))
    }
}
