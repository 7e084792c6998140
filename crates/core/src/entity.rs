//! Entity trait: identity that survives edits.

/// Anything with a stable identifier inside a collection.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Index of the entity with `id` in `items`, if present.
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row(u32);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.0
        }
    }

    #[test]
    fn position_of_finds_first_match() {
        let rows = [Row(4), Row(7), Row(9)];
        assert_eq!(position_of(&rows, &7), Some(1));
        assert_eq!(position_of(&rows, &1), None);
    }
}
