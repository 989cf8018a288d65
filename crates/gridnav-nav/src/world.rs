use gridnav_core::{WorldMut, WorldView};

use crate::{Movement, NodeGrid};

pub trait NavWorldView: WorldView {
    fn grid(&self) -> &NodeGrid;

    fn movement(&self, agent: Self::Agent) -> Option<&dyn Movement>;

    fn position(&self, agent: Self::Agent) -> Option<crate::Vec2> {
        self.movement(agent).map(|m| m.position())
    }
}

pub trait NavWorldMut: WorldMut + NavWorldView {
    fn movement_mut(&mut self, agent: Self::Agent) -> Option<&mut dyn Movement>;
}
