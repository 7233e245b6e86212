use std::sync::Arc;

use uuid::Uuid;

use crate::models::{Goal, Workout};

/// A document that can be kept in a [`Book`].
pub trait Document: Clone {
    fn document_id(&self) -> Uuid;
}

impl Document for Goal {
    fn document_id(&self) -> Uuid {
        self.goal_id
    }
}

impl Document for Workout {
    fn document_id(&self) -> Uuid {
        self.workout_id
    }
}

/// Immutable, newest-first view of a user's documents.
///
/// Every change returns a new book; existing books are never modified, so a
/// book can be handed to several readers at once.
#[derive(Debug, Clone)]
pub struct Book<T> {
    items: Arc<[T]>,
}

pub type GoalBook = Book<Goal>;
pub type WorkoutBook = Book<Workout>;

impl<T> Default for Book<T> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<T: Document> Book<T> {
    /// Builds a book from a store read, which is oldest first.
    pub fn from_store(items: Vec<T>) -> Self {
        Self::from_ordered(crate::services::goal_list::newest_first(items))
    }

    /// Builds a book from items already in display order.
    fn from_ordered(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// Puts `item` at the front, dropping any previous version with the same id.
    pub fn add_or_update(&self, item: T) -> Self {
        let id = item.document_id();
        let items: Vec<T> = std::iter::once(item)
            .chain(
                self.items
                    .iter()
                    .filter(|existing| existing.document_id() != id)
                    .cloned(),
            )
            .collect();

        Self::from_ordered(items)
    }

    pub fn remove(&self, id: Uuid) -> Self {
        let items: Vec<T> = self
            .items
            .iter()
            .filter(|existing| existing.document_id() != id)
            .cloned()
            .collect();

        Self::from_ordered(items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalType;
    use chrono::NaiveDateTime;

    fn goal(title: &str) -> Goal {
        Goal {
            goal_id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            title: title.to_string(),
            exercise: "Squat".to_string(),
            goal_type: GoalType::OneRepMax,
            unit: "lbs".to_string(),
            start_value: None,
            current_value: None,
            target_value: None,
            secondary_value: None,
            secondary_unit: None,
            completed: false,
            completed_at: None,
            created_at: NaiveDateTime::default(),
        }
    }

    fn titles(book: &GoalBook) -> Vec<String> {
        book.iter().map(|g| g.title.clone()).collect()
    }

    #[test]
    fn test_from_store_is_newest_first() {
        let book = GoalBook::from_store(vec![goal("old"), goal("mid"), goal("new")]);
        assert_eq!(titles(&book), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_add_puts_item_first() {
        let book = GoalBook::from_ordered(vec![goal("a"), goal("b")]);
        let updated = book.add_or_update(goal("c"));

        assert_eq!(titles(&updated), vec!["c", "a", "b"]);
        assert_eq!(titles(&book), vec!["a", "b"]);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let first = goal("a");
        let book = GoalBook::from_ordered(vec![goal("b"), first.clone()]);

        let mut renamed = first.clone();
        renamed.title = "a2".to_string();
        let updated = book.add_or_update(renamed);

        assert_eq!(titles(&updated), vec!["a2", "b"]);
        assert_eq!(updated.iter().next().map(|g| g.goal_id), Some(first.goal_id));
    }

    #[test]
    fn test_remove() {
        let target = goal("gone");
        let book = GoalBook::from_ordered(vec![goal("kept"), target.clone()]);

        let updated = book.remove(target.goal_id);

        assert_eq!(titles(&updated), vec!["kept"]);
        assert_eq!(titles(&book), vec!["kept", "gone"]);
        assert_eq!(GoalBook::default().remove(target.goal_id).iter().count(), 0);
    }
}
