use super::{Place, Todo};

/// Configuration for the todos app's starting list.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Start the list with two example entries
    pub seed_examples: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        TodoConfig {
            seed_examples: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    UnknownId(u64),
}

/// Ordered todo collection with monotonically increasing ids.
///
/// Entries keep insertion order. Ids stay unique for the life of the list
/// and are not reused after removal. An operation naming a missing id is
/// rejected without touching the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u64,
}

impl TodoList {
    /// Create an empty list
    pub fn new() -> Self {
        TodoList {
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a list preloaded with two example entries, one still open and
    /// one already done.
    pub fn seeded() -> Self {
        let mut list = TodoList::new();
        list.add("Water the plants".to_string(), Some(Place::Home));
        list.add("File the expense report".to_string(), Some(Place::Work));
        list.items[1].done = true;
        list
    }

    /// Append a new entry and return its id.
    ///
    /// Text is stored as given; trimming and empty-input rules are the input
    /// layer's concern.
    pub fn add(&mut self, text: String, place: Option<Place>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Todo {
            id,
            text,
            done: false,
            place,
        });
        id
    }

    /// Flip the done flag of the entry with `id`
    pub fn toggle(&mut self, id: u64) -> Result<(), TodoError> {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.done = !todo.done;
                Ok(())
            }
            None => Err(TodoError::UnknownId(id)),
        }
    }

    /// Remove and return the entry with `id`
    pub fn remove(&mut self, id: u64) -> Result<Todo, TodoError> {
        match self.items.iter().position(|t| t.id == id) {
            Some(pos) => Ok(self.items.remove(pos)),
            None => Err(TodoError::UnknownId(id)),
        }
    }

    /// Mark every entry done
    pub fn complete_all(&mut self) {
        for todo in &mut self.items {
            todo.done = true;
        }
    }

    /// True if any entry is still open
    pub fn has_unfinished(&self) -> bool {
        self.items.iter().any(|t| !t.done)
    }

    /// Number of entries still open
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|t| !t.done).count()
    }

    /// Entries in insertion order
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
