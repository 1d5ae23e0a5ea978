//! Ordered set of CSS class names attached to an element.

use std::fmt;

/// Class names in insertion order, without duplicates.
///
/// Mutators report whether the list actually changed so callers can skip
/// redundant style writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Add a class, returns true if it was not present yet
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a class, returns true if it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Add or remove a class depending on `on`, returns true on change
    pub fn set(&mut self, name: &str, on: bool) -> bool {
        if on {
            self.add(name)
        } else {
            self.remove(name)
        }
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

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for name in iter {
            list.add(name);
        }
        list
    }
}
