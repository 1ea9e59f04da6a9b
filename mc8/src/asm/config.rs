/// Visible characters kept per source line, anything past it is dropped.
pub const DEFAULT_MAX_LINE_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmConfig {
    /// `None` lifts the line length limit.
    pub max_line_len: Option<usize>,
}

impl Default for AsmConfig {
    fn default() -> Self {
        AsmConfig { max_line_len: Some(DEFAULT_MAX_LINE_LEN) }
    }
}

impl AsmConfig {
    pub fn unbounded() -> Self {
        AsmConfig { max_line_len: None }
    }

    pub fn with_max_line_len(len: usize) -> Self {
        AsmConfig { max_line_len: Some(len) }
    }
}
