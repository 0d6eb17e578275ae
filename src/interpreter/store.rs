use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::error::RuntimeError;

/// Result type used by the store, the builtins and the environment glue.
///
/// All evaluation helpers return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Holds the variables of one program run.
///
/// The store keeps the current value of every name, the set of names that
/// went through a declaration, and the subset of those that are constants.
///
/// ## Invariants
/// - A name is declared at most once per run.
/// - Statements may only read, write or receive input into declared names.
/// - A constant is never written after its declaration.
///
/// Expression-level assignments are allowed to create a value for a name that
/// was never declared (see [`write`](Self::write)); such names can be read
/// back but are still not declared.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    values:    HashMap<String, Decimal>,
    declared:  HashSet<String>,
    constants: HashSet<String>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with externally supplied bindings.
    ///
    /// Seeded names count as declared variables, so a program may read and
    /// assign them but not declare them again.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use rust_decimal::Decimal;
    /// use starlight::interpreter::store::VariableStore;
    ///
    /// let store = VariableStore::with_bindings(HashMap::from([("x".to_string(),
    ///                                                          Decimal::from(3))]));
    /// assert!(store.is_declared("x"));
    /// assert_eq!(store.get("x", 1).unwrap(), Decimal::from(3));
    /// ```
    #[must_use]
    pub fn with_bindings(bindings: HashMap<String, Decimal>) -> Self {
        let declared = bindings.keys().cloned().collect();
        Self { values: bindings,
               declared,
               constants: HashSet::new() }
    }

    /// Declares a variable with an initial value.
    ///
    /// # Errors
    /// `AlreadyDeclared` if the name was declared before in this run.
    pub fn declare(&mut self, name: &str, value: Decimal, line: usize) -> EvalResult<()> {
        if !self.declared.insert(name.to_string()) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                       line });
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Declares a constant with its value.
    ///
    /// # Errors
    /// `AlreadyDeclared` if the name was declared before in this run.
    pub fn declare_const(&mut self, name: &str, value: Decimal, line: usize) -> EvalResult<()> {
        self.declare(name, value, line)?;
        self.constants.insert(name.to_string());
        Ok(())
    }

    /// Assigns a new value to a declared variable.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if the name was never declared.
    /// - `AssignmentToConstant` if the name is a constant.
    pub fn assign(&mut self, name: &str, value: Decimal, line: usize) -> EvalResult<()> {
        if !self.declared.contains(name) {
            return Err(RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                          line });
        }
        self.write(name, value, line)
    }

    /// Writes a value without requiring a declaration.
    ///
    /// This is the path taken by assignments nested inside expressions.
    ///
    /// # Errors
    /// `AssignmentToConstant` if the name is a constant.
    pub fn write(&mut self, name: &str, value: Decimal, line: usize) -> EvalResult<()> {
        if self.constants.contains(name) {
            return Err(RuntimeError::AssignmentToConstant { name: name.to_string(),
                                                            line });
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the value of a name.
    ///
    /// # Errors
    /// `UndeclaredVariable` if the name holds no value.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Decimal> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                              line })
    }

    /// Returns the value of a name, or zero if it holds none.
    #[must_use]
    pub fn value_or_zero(&self, name: &str) -> Decimal {
        self.values.get(name).copied().unwrap_or(Decimal::ZERO)
    }

    /// Returns `true` if the name went through a declaration or was seeded.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Returns `true` if the name was declared as a constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    /// Returns every name and its current value.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Decimal> {
        &self.values
    }

    /// Consumes the store, returning every name and its current value.
    #[must_use]
    pub fn into_variables(self) -> HashMap<String, Decimal> {
        self.values
    }
}
