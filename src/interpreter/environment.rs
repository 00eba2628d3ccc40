use std::{collections::HashMap, fmt};

/// Variable bindings of a running program.
///
/// Names map to 64-bit integers. Bindings are kept in the order each name was
/// first assigned, which is the order they are reported in; overwriting a
/// binding keeps its original position. Two environments are equal when
/// they hold the same bindings, regardless of order.
///
/// # Example
/// ```
/// use imp::interpreter::environment::Environment;
///
/// let mut env = Environment::new();
/// env.assign("i", 1);
/// env.assign("j", 5);
/// env.assign("i", 2);
///
/// assert_eq!(env.get("i"), Some(2));
/// assert_eq!(env, Environment::from_iter([("j", 5), ("i", 2)]));
/// assert_eq!(env.to_string(), "  i = 2\n  j = 5\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    slots:    HashMap<String, usize>,
    bindings: Vec<(String, i64)>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.slots.get(name).map(|&slot| self.bindings[slot].1)
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn assign(&mut self, name: &str, value: i64) {
        if let Some(&slot) = self.slots.get(name) {
            self.bindings[slot].1 = value;
            return;
        }
        self.slots.insert(name.to_string(), self.bindings.len());
        self.bindings.push((name.to_string(), value));
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.bindings.clear();
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Renders the report printed after a program completes.
    #[must_use]
    pub fn report(&self) -> String {
        format!("Program complete. Printing environment...\n{self}")
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Environment {}

impl<S: AsRef<str>> FromIterator<(S, i64)> for Environment {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut env = Self::new();
        for (name, value) in iter {
            env.assign(name.as_ref(), value);
        }
        env
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "  {name} = {value}")?;
        }
        Ok(())
    }
}
