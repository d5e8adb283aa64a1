use indexmap::IndexSet;

/// Qualified names of targets awaiting analysis, kept across rounds.
///
/// Names stay in insertion order and appear at most once.
#[derive(Debug, Default, Clone)]
pub struct PendingQueue {
    names: IndexSet<String>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the names not already pending, returning how many were added.
    pub fn extend<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.names.len();
        for name in names {
            if self.names.insert(name.clone()) {
                log::debug!("Queued factory target {name}");
            }
        }
        self.names.len() - before
    }

    /// Visits every pending name in order, dropping those for which `keep` returns `false`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.names.retain(|name| keep(name));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_kept_in_insertion_order_without_duplicates() {
        // Arrange the queue
        let mut queue = PendingQueue::new();
        queue.extend(["a.B".to_owned(), "a.C".to_owned()]);

        // Act the second round's admission
        let added = queue.extend(["a.C".to_owned(), "a.A".to_owned()]);

        // Assert the result
        assert_eq!(added, 1);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["a.B", "a.C", "a.A"]);
    }

    #[test]
    fn test_retain_visits_in_order_and_drops_handled_names() {
        // Arrange the queue
        let mut queue = PendingQueue::new();
        queue.extend(["a.B".to_owned(), "a.C".to_owned(), "a.D".to_owned()]);
        let mut visited = Vec::new();

        // Act the traversal
        queue.retain(|name| {
            visited.push(name.to_owned());
            name == "a.C"
        });

        // Assert the result
        assert_eq!(visited, vec!["a.B", "a.C", "a.D"]);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["a.C"]);
        assert!(queue.contains("a.C"));
        assert!(!queue.contains("a.B"));
    }
}
