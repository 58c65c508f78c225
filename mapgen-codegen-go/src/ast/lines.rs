//! Multi-line text with relative nesting.

use mapgen_codegen::builder::CodeFragment;

/// Rendered text of an expression or statement.
///
/// Each line carries its nesting depth relative to the first line, so a
/// composite literal can span several lines and still be spliced into the
/// middle of a call or assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines(Vec<(usize, String)>);

impl Lines {
    pub fn single(text: impl Into<String>) -> Self {
        Self(vec![(0, text.into())])
    }

    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }

    /// Prepend `text` to the first line.
    pub fn prefixed(mut self, text: &str) -> Self {
        if let Some((_, first)) = self.0.first_mut() {
            first.insert_str(0, text);
        }
        self
    }

    /// Append `text` to the last line.
    pub fn suffixed(mut self, text: &str) -> Self {
        self.push_str(text);
        self
    }

    pub fn push_str(&mut self, text: &str) {
        match self.0.last_mut() {
            Some((_, last)) => last.push_str(text),
            None => self.0.push((0, text.to_string())),
        }
    }

    /// Add a line at `depth`.
    pub fn push_line(&mut self, depth: usize, text: impl Into<String>) {
        self.0.push((depth, text.into()));
    }

    /// Continue the last line with `other`; deeper lines of `other` keep
    /// their nesting relative to where it was spliced in.
    pub fn append(&mut self, other: Lines) {
        let base = self.0.last().map_or(0, |(depth, _)| *depth);
        let mut rest = other.0.into_iter();
        if let Some((_, first)) = rest.next() {
            self.push_str(&first);
        }
        self.0
            .extend(rest.map(|(depth, text)| (base + depth, text)));
    }

    /// Shift every line `by` levels deeper.
    pub fn nested(mut self, by: usize) -> Self {
        for (depth, _) in &mut self.0 {
            *depth += by;
        }
        self
    }

    pub fn extend(&mut self, other: Lines) {
        self.0.extend(other.0);
    }

    /// Collapse into one line. Only meaningful for single-line text.
    pub fn text(&self) -> String {
        self.0
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_fragments(&self) -> Vec<CodeFragment> {
        nest(&self.0, 0)
    }
}

fn nest(lines: &[(usize, String)], depth: usize) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].0 <= depth {
            fragments.push(CodeFragment::line(lines[i].1.clone()));
            i += 1;
            continue;
        }
        let start = i;
        while i < lines.len() && lines[i].0 > depth {
            i += 1;
        }
        fragments.push(CodeFragment::indent(nest(&lines[start..i], depth + 1)));
    }
    fragments
}

impl FromIterator<(usize, String)> for Lines {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
