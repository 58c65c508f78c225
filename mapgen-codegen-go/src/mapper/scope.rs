//! Local variable names within one generated function.

use std::collections::BTreeSet;

use crate::naming::GO_NAMING;

/// Hands out function-unique local names.
///
/// Temporaries are derived from a hint (usually the field they hold) and
/// numbered on collision; loop indices run `i`, `j`, `k`, `i3`, `i4`, ...
#[derive(Debug, Clone, Default)]
pub struct FnScope {
    taken: BTreeSet<String>,
    loops: usize,
}

impl FnScope {
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: reserved.into_iter().map(Into::into).collect(),
            loops: 0,
        }
    }

    pub fn reserve(&mut self, name: impl Into<String>) {
        self.taken.insert(name.into());
    }

    /// A fresh local named after `hint`.
    pub fn fresh(&mut self, hint: &str) -> String {
        let base = GO_NAMING.local_name(hint);
        let base = if base.is_empty() { "v".to_string() } else { base };
        if self.taken.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    /// The next unused loop index.
    pub fn loop_index(&mut self) -> String {
        loop {
            let name = match self.loops {
                0 => "i".to_string(),
                1 => "j".to_string(),
                2 => "k".to_string(),
                n => format!("i{}", n),
            };
            self.loops += 1;
            if self.taken.insert(name.clone()) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_numbers_collisions() {
        let mut scope = FnScope::new(["r", "ro"]);
        assert_eq!(scope.fresh("Thumbnails"), "thumbnails");
        assert_eq!(scope.fresh("thumbnails"), "thumbnails2");
        assert_eq!(scope.fresh("thumbnails"), "thumbnails3");
        assert_eq!(scope.fresh("r"), "r2");
    }

    #[test]
    fn test_fresh_escapes_reserved_words() {
        let mut scope = FnScope::default();
        assert_eq!(scope.fresh("Type"), "type_");
        assert_eq!(scope.fresh("len"), "len_");
    }

    #[test]
    fn test_loop_indices() {
        let mut scope = FnScope::new(["j"]);
        let names: Vec<_> = (0..4).map(|_| scope.loop_index()).collect();
        assert_eq!(names, ["i", "k", "i3", "i4"]);
    }
}
