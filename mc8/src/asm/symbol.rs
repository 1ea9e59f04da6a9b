use std::collections::HashMap;

use crate::asm::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name:   String,
    // Instruction index, 1 instruction = 1 byte so this is also the byte address
    pub offset: u16,
}

// Insertion ordered, with a name index on the side for lookups
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index:   HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Bind `name` to `offset`. A name can only be bound once, the table is
    /// left unchanged on a duplicate.
    pub fn insert(&mut self, name: String, offset: u16) -> Result<(), ErrorKind> {
        if self.index.contains_key(&name) {
            return Err(ErrorKind::DuplicateLabel);
        }
        self.index.insert(name.clone(), self.symbols.len());
        self.symbols.push(Symbol { name, offset });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
