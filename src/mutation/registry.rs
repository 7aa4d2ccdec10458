//! Type-name keyed operator registry.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::operators::{MutationOperator, builtin_operators};
use crate::types::TypeDescriptor;

/// Maps type names to mutation operators.
///
/// At most one operator per type name; registering again under the same name replaces the
/// previous operator. Build it once, then share it by reference.
#[derive(Debug, Clone)]
pub struct MutationRegistry {
    operators: HashMap<String, Arc<dyn MutationOperator>>,
}

impl MutationRegistry {
    /// Registry with no operators.
    pub fn new() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    /// Registry pre-populated with the eight built-in operators.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for operator in builtin_operators() {
            registry.register_arc(operator);
        }
        registry
    }

    /// Register `operator` under its type name, replacing any existing entry.
    pub fn register(&mut self, operator: impl MutationOperator + 'static) -> &mut Self {
        self.register_arc(Arc::new(operator))
    }

    /// Register a shared operator under its type name, replacing any existing entry.
    pub fn register_arc(&mut self, operator: Arc<dyn MutationOperator>) -> &mut Self {
        let type_name = operator.value_type().name().to_string();
        if let Some(previous) = self.operators.insert(type_name.clone(), operator) {
            tracing::debug!(
                target: "eth_pbt::mutation",
                type_name = %type_name,
                replaced = previous.name(),
                "replaced mutation operator"
            );
        }
        self
    }

    /// Operator registered for the descriptor's name.
    pub fn get_operator(&self, value_type: &dyn TypeDescriptor) -> Option<Arc<dyn MutationOperator>> {
        self.operators.get(value_type.name()).cloned()
    }

    /// Snapshot of all registered operators, in no particular order.
    pub fn operators(&self) -> Vec<Arc<dyn MutationOperator>> {
        self.operators.values().cloned().collect()
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Mutations of `value` as `value_type`.
    ///
    /// Falls back to `[value]` when no operator is registered for the type or the operator does
    /// not accept the value.
    pub fn mutate(&self, value: &Value, value_type: &dyn TypeDescriptor) -> Vec<Value> {
        match self.operators.get(value_type.name()) {
            Some(operator) if operator.is_applicable(value) => operator.mutate(value),
            Some(operator) => {
                tracing::debug!(
                    target: "eth_pbt::mutation",
                    type_name = value_type.name(),
                    operator = operator.name(),
                    "seed rejected by operator, leaving value unmutated"
                );
                vec![value.clone()]
            }
            None => {
                tracing::debug!(
                    target: "eth_pbt::mutation",
                    type_name = value_type.name(),
                    "no operator registered, leaving value unmutated"
                );
                vec![value.clone()]
            }
        }
    }
}

impl Default for MutationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
