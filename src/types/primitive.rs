//! JSON primitive descriptors.

use std::sync::Arc;

use serde_json::Value;

use super::TypeDescriptor;

/// Largest integer an IEEE-754 double represents exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
/// Smallest integer an IEEE-754 double represents exactly.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// `true` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanType;

impl TypeDescriptor for BooleanType {
    fn name(&self) -> &str {
        "Boolean"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value.is_boolean()
    }
}

/// Any finite JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberType;

impl TypeDescriptor for NumberType {
    fn name(&self) -> &str {
        "Number"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value.as_f64().is_some_and(f64::is_finite)
    }
}

/// Any JSON string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringType;

impl TypeDescriptor for StringType {
    fn name(&self) -> &str {
        "String"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value.is_string()
    }
}

/// Accepts every value. Element type of [`ArrayType::any`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyType;

impl TypeDescriptor for AnyType {
    fn name(&self) -> &str {
        "Any"
    }

    fn is_valid(&self, _value: &Value) -> bool {
        true
    }
}

/// Homogeneous array.
///
/// Every array descriptor is named `"Array"` regardless of its element type, so a single
/// registered operator serves arrays of all element types.
#[derive(Debug, Clone)]
pub struct ArrayType {
    element: Arc<dyn TypeDescriptor>,
}

impl ArrayType {
    /// Array whose elements must satisfy `element`.
    pub fn of(element: impl TypeDescriptor + 'static) -> Self {
        Self {
            element: Arc::new(element),
        }
    }

    /// Array with elements of any type.
    pub fn any() -> Self {
        Self::of(AnyType)
    }

    /// Element descriptor.
    pub fn element(&self) -> &dyn TypeDescriptor {
        self.element.as_ref()
    }
}

impl Default for ArrayType {
    fn default() -> Self {
        Self::any()
    }
}

impl TypeDescriptor for ArrayType {
    fn name(&self) -> &str {
        "Array"
    }

    fn is_valid(&self, value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(|item| self.element.is_valid(item)))
    }
}
