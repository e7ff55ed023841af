// Constants and runtime configuration for the AcDc compiler

/// Longest lexeme text the lexer accepts
pub const MAX_LEXEME_LEN: usize = 1024;

/// Longest identifier accepted in a declaration, assignment or print
pub const MAX_NAME_LEN: usize = 64;

/// Number of declarations the symbol table is sized for
pub const EXPECTED_DECLARATIONS: usize = 23;

/// Slots allocated per expected declaration
pub const SYMBOL_TABLE_FACTOR: usize = 2;

/// Default symbol table capacity. The table never grows past this.
pub const SYMBOL_TABLE_CAPACITY: usize = EXPECTED_DECLARATIONS * SYMBOL_TABLE_FACTOR;

/// Emitted after every store. Resets dc's precision register.
pub const POST_STORE_DIRECTIVE: &str = "0 k";

/// Emitted after a coerced subexpression when [`CompilerConfig::coercion_scale`] is set
pub const COERCION_DIRECTIVE: &str = "5k";

/// Environment variable overriding [`CompilerConfig::symbol_capacity`]
pub const ENV_SYMBOL_CAPACITY: &str = "ACDC_SYMBOL_CAPACITY";

/// Environment variable toggling [`CompilerConfig::coercion_scale`]
pub const ENV_COERCION_SCALE: &str = "ACDC_COERCION_SCALE";

/// Knobs for one compilation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Fixed number of symbol table slots
    pub symbol_capacity: usize,
    /// Emit [`COERCION_DIRECTIVE`] after every int -> float coercion (on by default)
    pub coercion_scale: bool,
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol_capacity(mut self, capacity: usize) -> Self {
        self.symbol_capacity = capacity;
        self
    }

    pub fn with_coercion_scale(mut self, enabled: bool) -> Self {
        self.coercion_scale = enabled;
        self
    }

    /// Build a config from the defaults, overridden by `ACDC_*` environment variables.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SYMBOL_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.symbol_capacity = capacity,
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_SYMBOL_CAPACITY),
            }
        }

        if let Some(raw) = lookup(ENV_COERCION_SCALE) {
            match raw.trim() {
                "1" | "true" | "yes" | "on" => config.coercion_scale = true,
                "0" | "false" | "no" | "off" => config.coercion_scale = false,
                "" => {}
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_COERCION_SCALE),
            }
        }

        config
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            symbol_capacity: SYMBOL_TABLE_CAPACITY,
            coercion_scale: true,
        }
    }
}
