use super::error::TableError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything a player can pick. Compared for equality and hashed, never mutated.
pub trait Choice: Clone + Eq + Hash + Debug + Send + Sync {}
impl<T> Choice for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// The ordered, duplicate-free set of choices shared by both players.
///
/// Order is preserved for traversal, display, and every ordered result
/// derived from the table.
#[derive(Debug, Clone)]
pub struct Domain<C> {
    choices: Vec<C>,
    index: HashMap<C, usize>,
}

impl<C> Domain<C>
where
    C: Choice,
{
    pub fn new(choices: Vec<C>) -> Result<Self, TableError> {
        if choices.is_empty() {
            return Err(TableError::EmptyDomain);
        }
        let mut index = HashMap::with_capacity(choices.len());
        for (i, choice) in choices.iter().enumerate() {
            if index.insert(choice.clone(), i).is_some() {
                return Err(TableError::DuplicateChoice(i));
            }
        }
        Ok(Self { choices, index })
    }
    pub fn len(&self) -> usize {
        self.choices.len()
    }
    pub fn position(&self, choice: &C) -> Option<usize> {
        self.index.get(choice).copied()
    }
    pub fn choice(&self, position: usize) -> &C {
        &self.choices[position]
    }
    pub fn choices(&self) -> &[C] {
        &self.choices
    }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &C> {
        self.choices.iter()
    }
    /// Pick out the choices whose positions are flagged, in domain order.
    pub fn select(&self, mask: &[bool]) -> Vec<C> {
        self.choices
            .iter()
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .map(|(c, _)| c.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_input_order() {
        let domain = Domain::new(vec!["c", "a", "b"]).unwrap();
        assert_eq!(domain.len(), 3);
        assert_eq!(domain.position(&"c"), Some(0));
        assert_eq!(domain.position(&"b"), Some(2));
        assert_eq!(domain.position(&"z"), None);
        assert_eq!(domain.choice(1), &"a");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Domain::<u8>::new(vec![]),
            Err(TableError::EmptyDomain)
        ));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(matches!(
            Domain::new(vec![1, 2, 3, 2]),
            Err(TableError::DuplicateChoice(3))
        ));
    }

    #[test]
    fn select_keeps_domain_order() {
        let domain = Domain::new(vec![5, 3, 9, 1]).unwrap();
        assert_eq!(domain.select(&[false, true, false, true]), vec![3, 1]);
    }
}
