use std::fmt;

/// How a find-or-insert query ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The key was already in the tree; nothing changed.
    Found,
    /// The key was missing and has been inserted.
    Inserted,
}

/// The path a find-or-insert query walked, ending with the queried key.
///
/// # Examples
/// ```
/// use search_trees::{Outcome, Trace};
///
/// let trace = Trace::new(vec![16, 300, 88], Outcome::Found);
/// assert_eq!(trace.key(), 88);
/// assert_eq!(trace.to_string(), "16\t300\t88\t");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    path: Vec<i32>,
    outcome: Outcome,
}

impl Trace {
    /// Constructs a trace from the visited keys. `path` must be non-empty and end with the
    /// resulting key.
    pub fn new(path: Vec<i32>, outcome: Outcome) -> Self {
        debug_assert!(!path.is_empty());
        Trace { path, outcome }
    }

    /// Returns the visited keys in visiting order.
    pub fn path(&self) -> &[i32] {
        &self.path
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the key the query resolved to.
    pub fn key(&self) -> i32 {
        self.path[self.path.len() - 1]
    }

    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for key in &self.path {
            write!(f, "{}\t", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Outcome, Trace};

    #[test]
    fn test_single_key() {
        let trace = Trace::new(vec![42], Outcome::Inserted);
        assert_eq!(trace.key(), 42);
        assert!(!trace.is_found());
        assert_eq!(trace.to_string(), "42\t");
    }

    #[test]
    fn test_path() {
        let trace = Trace::new(vec![1, 2, 3], Outcome::Found);
        assert_eq!(trace.path(), &[1, 2, 3]);
        assert_eq!(trace.outcome(), Outcome::Found);
    }
}
