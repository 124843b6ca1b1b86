//! A minimal ordered container of drawable entities.

use crate::axes::AxisLabels;
use crate::curve::Curve;

/// Handle to an entity inside a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u64);

/// Something a figure draws on top of its axes.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A plotted curve.
    Curve(Curve),
    /// An axis label pair.
    Labels(AxisLabels),
}

/// Entities in draw order.
#[derive(Debug, Clone, Default)]
pub struct Group {
    entities: Vec<(EntityId, Entity)>,
    next_id: u64,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity, returning its handle.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }

    /// Detach an entity, returning it if it was present.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entities.remove(index).1)
    }

    /// Look up an entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, entity)| entity)
    }

    /// Iterate entities in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().map(|(_, entity)| entity)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether the group is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::Label;
    use crate::geom::ScreenPoint;

    fn labels() -> Entity {
        let label = Label {
            text: "t".to_string(),
            position: ScreenPoint::new(0.0, 0.0),
        };
        Entity::Labels(AxisLabels {
            x: label.clone(),
            y: label,
        })
    }

    #[test]
    fn remove_detaches_only_the_target() {
        let mut group = Group::new();
        let first = group.add(labels());
        let second = group.add(labels());
        assert!(group.remove(first).is_some());
        assert!(group.remove(first).is_none());
        assert!(group.get(second).is_some());
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut group = Group::new();
        let first = group.add(labels());
        group.remove(first);
        let second = group.add(labels());
        assert_ne!(first, second);
    }
}
