/// Optional location tag on a todo entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Home,
    Work,
}

impl Place {
    /// Get place name for display
    pub fn name(self) -> &'static str {
        match self {
            Place::Home => "Home",
            Place::Work => "Work",
        }
    }
}

/// One todo entry. Ids are handed out by the owning list and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
    pub place: Option<Place>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_name() {
        assert_eq!(Place::Home.name(), "Home");
        assert_eq!(Place::Work.name(), "Work");
    }
}
