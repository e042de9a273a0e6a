//! Parser configuration.

/// What a token list is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Exactly one assignment (`L`), with nothing after it.
    #[default]
    Statement,
    /// One or more assignments (`S ::= L L*`).
    Program,
}

/// Deepest `E` nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub mode: ParseMode,
    /// In program mode, keep going after a bad statement so several errors are reported in one pass.
    pub recover: bool,
    /// Maximum number of nested `E` rules (each `(`, unary `-` and tail `-` opens one).
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Statement,
            recover: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_recovery(mut self, recover: bool) -> Self {
        self.recover = recover;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
