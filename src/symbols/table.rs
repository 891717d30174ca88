use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::NumType,
    Position,
};

/// The declared variables of one compilation run.
///
/// The language has no lexical scoping, so this is a single flat map from
/// name to numeric type that lives for the whole source file. A name enters
/// the table at most once; `lookup(name) == Some(ty)` doubles as the
/// "declared as T" membership check.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: HashMap<String, NumType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variables: HashMap::new(),
        }
    }

    pub fn declare(
        &mut self,
        name: String,
        num_type: NumType,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variables.contains_key(&name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared { variable: name },
                current_position,
            ))
        } else {
            self.variables.insert(name, num_type);
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str) -> Option<NumType> {
        self.variables.get(name).copied()
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}
