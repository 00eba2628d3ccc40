/// Default maximum nesting depth for parsing and evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resource limits shared by the parser and the interpreter.
///
/// Parsing and evaluation recurse once per level of expression or statement
/// nesting. `max_depth` caps that recursion so that pathological input is
/// reported as an error instead of overflowing the stack. The default keeps
/// the deepest accepted program well inside a 2 MiB thread stack, even in
/// unoptimized builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested expression or statement levels.
    pub max_depth: usize,
}

impl Limits {
    /// Creates limits with the given maximum depth.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}
