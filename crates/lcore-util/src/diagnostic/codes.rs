//! Diagnostic codes for categorizing compiler errors.
//!
//! Codes follow the five-category taxonomy the pipeline reports against:
//! lexical, syntactic, semantic name-resolution, semantic type, and
//! structural. Grouping by leading digit (1xxx lexical, 2xxx syntactic, …)
//! mirrors how the stages themselves are ordered.

/// A unique code identifying a diagnostic message.
///
/// # Examples
///
/// ```
/// use lcore_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
/// assert_eq!(code.prefix(), "E");
/// assert_eq!(code.as_str(), "E1001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" — every diagnostic this pipeline raises is an error).
    pub prefix: &'static str,
    /// The numeric identifier.
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The full code string, e.g. `"E1001"`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexical (1xxx) — §7 taxonomy category 1.
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1001);
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1002);

    // Syntactic (2xxx) — §7 taxonomy category 2.
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    pub const E_PARSE_MISSING_DELIMITER: Self = Self::new("E", 2002);
    pub const E_PARSE_MISSING_OPERATOR: Self = Self::new("E", 2003);
    pub const E_PARSE_STRUCTURAL: Self = Self::new("E", 2004);

    // Semantic — name resolution (3xxx) — §7 taxonomy category 3.
    pub const E_SEM_UNDEFINED_VARIABLE: Self = Self::new("E", 3001);
    pub const E_SEM_UNDEFINED_FUNCTION: Self = Self::new("E", 3002);

    // Semantic — type (4xxx) — §7 taxonomy category 4.
    pub const E_SEM_CONDITION_NOT_BOOLEAN: Self = Self::new("E", 4001);
    pub const E_SEM_OPERAND_TYPE_MISMATCH: Self = Self::new("E", 4002);
    pub const E_SEM_CALL_ARITY_MISMATCH: Self = Self::new("E", 4003);
    pub const E_SEM_CALL_ARGUMENT_TYPE_MISMATCH: Self = Self::new("E", 4004);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
