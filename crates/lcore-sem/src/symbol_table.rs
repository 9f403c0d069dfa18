//! The symbol table (§4.3): a flat identifier-to-type map plus, for every
//! callable name, its ordered parameter-type list. L has no block scoping
//! — a single flat namespace for the whole compilation unit, matching how
//! the reference's forward references and return-type refinement behave
//! (§3 "One type per identifier; later declarations overwrite earlier
//! ones").

use crate::builtins::BUILTINS;
use crate::types::Type;
use indexmap::IndexMap;
use lcore_util::Span;

/// Where a symbol was declared, kept for potential diagnostics/tooling
/// that want to point back at the declaration site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclSite {
    pub line: u32,
    pub column: u32,
}

impl From<Span> for DeclSite {
    fn from(span: Span) -> Self {
        DeclSite { line: span.line, column: span.column }
    }
}

/// Identifier-to-type map, pre-seeded with the built-in catalogue and
/// populated during semantic analysis with user-defined names.
///
/// Backed by an insertion-ordered map rather than a `HashMap`, so that any
/// debug dump of its contents is deterministic (§4.3 "Ambient behavior"),
/// consistent with the determinism the code generator (§4.5) and
/// diagnostic ordering (§5) both require.
pub struct SymbolTable {
    types: IndexMap<String, (Type, DeclSite)>,
    function_params: IndexMap<String, Vec<Type>>,
    function_returns: IndexMap<String, Type>,
}

impl SymbolTable {
    /// A fresh table with the built-in catalogue pre-seeded. Built-ins are
    /// never removed — later user declarations can still shadow a
    /// built-in's *variable* type slot (if a program reuses the name as a
    /// variable), but `function_params`/`function_returns` for a built-in
    /// name are fixed at construction.
    pub fn new() -> Self {
        let mut function_params = IndexMap::new();
        let mut function_returns = IndexMap::new();
        for b in BUILTINS {
            function_params.insert(b.name.to_string(), b.params.to_vec());
            function_returns.insert(b.name.to_string(), b.return_type);
        }
        Self {
            types: IndexMap::new(),
            function_params,
            function_returns,
        }
    }

    /// Records (or overwrites) the type of a variable. Last write wins.
    pub fn add(&mut self, name: impl Into<String>, ty: Type, site: DeclSite) {
        self.types.insert(name.into(), (ty, site));
    }

    pub fn add_function_params(&mut self, name: impl Into<String>, params: Vec<Type>) {
        self.function_params.insert(name.into(), params);
    }

    pub fn add_function_return(&mut self, name: impl Into<String>, return_type: Type) {
        self.function_returns.insert(name.into(), return_type);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// A variable's type, or `Double` on miss — load-bearing legacy
    /// behavior for the emitter (§9 "SymbolTable defaults"). Callers that
    /// need to *diagnose* an undefined identifier must check
    /// [`SymbolTable::contains`] first; this accessor never itself signals
    /// "missing".
    pub fn get_type(&self, name: &str) -> Type {
        self.types.get(name).map(|(ty, _)| *ty).unwrap_or(Type::Double)
    }

    pub fn get_decl_site(&self, name: &str) -> Option<DeclSite> {
        self.types.get(name).map(|(_, site)| *site)
    }

    pub fn is_callable(&self, name: &str) -> bool {
        self.function_params.contains_key(name)
    }

    /// A callable's parameter types, or empty on miss (§4.3).
    pub fn get_function_params(&self, name: &str) -> &[Type] {
        self.function_params.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn get_function_return(&self, name: &str) -> Type {
        self.function_returns.get(name).copied().unwrap_or(Type::Double)
    }

    pub fn is_builtin(name: &str) -> bool {
        BUILTINS.iter().any(|b| b.name == name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
