//! Stack sample definitions.

/// One sampled call stack, as written by the instrumentation layer.
///
/// Frames are stored in log order: the innermost (most recent) call first,
/// then progressively shallower callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    frames: Vec<String>,
}

impl Branch {
    /// Start a branch from the call found on its marker line
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            frames: vec![first.into()],
        }
    }

    /// Build a branch from frames given innermost first
    pub fn from_frames<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }

    /// Append the next (shallower) frame
    pub fn push(&mut self, frame: impl Into<String>) {
        self.frames.push(frame.into());
    }

    /// Frames in log order (innermost first)
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames from the outermost caller down to the innermost call.
    ///
    /// This is the root-to-leaf order used when merging into a call tree.
    pub fn outermost_first(&self) -> impl Iterator<Item = &str> + '_ {
        self.frames.iter().rev().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outermost_first_reverses_log_order() {
        let branch = Branch::from_frames(["leaf", "middle", "main"]);
        let order: Vec<&str> = branch.outermost_first().collect();
        assert_eq!(order, vec!["main", "middle", "leaf"]);
    }

    #[test]
    fn test_push_keeps_empty_frames() {
        let mut branch = Branch::new("inner");
        branch.push("");
        assert_eq!(branch.len(), 2);
        assert_eq!(branch.frames()[1], "");
    }
}
