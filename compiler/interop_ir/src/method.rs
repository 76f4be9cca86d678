//! Method shapes shared by every function-like descriptor.

/// A declared parameter: name plus the binding-language type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The declared shape of a method.
///
/// `modifiers` is reproduced verbatim on the generated implementation, e.g.
/// `public partial` or `public static partial`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodInfo {
    pub name: String,
    pub modifiers: String,
    pub return_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<Parameter>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_static: bool,
}

impl MethodInfo {
    /// Create a `public partial` instance method with no parameters.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: "public partial".to_string(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            is_static: false,
        }
    }

    /// Create a `public static partial` method with no parameters.
    pub fn new_static(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            modifiers: "public static partial".to_string(),
            is_static: true,
            ..Self::new(name, return_type)
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    #[inline]
    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }

    /// Native booleans are one byte wide; this flags returns that need an
    /// explicit single-byte marshalling annotation.
    #[inline]
    pub fn returns_bool(&self) -> bool {
        self.return_type == "bool"
    }

    /// Modifiers without the `partial` keyword, for hand-written overloads.
    pub fn modifiers_without_partial(&self) -> String {
        self.modifiers
            .split_whitespace()
            .filter(|m| *m != "partial")
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_constructor_sets_flag_and_modifiers() {
        let method = MethodInfo::new_static("Instance", "Foo*");
        assert!(method.is_static);
        assert_eq!(method.modifiers, "public static partial");
    }

    #[test]
    fn partial_is_stripped_from_modifiers() {
        let method = MethodInfo::new_static("Print", "void");
        assert_eq!(method.modifiers_without_partial(), "public static");
        let method = MethodInfo::new("Print", "void").with_modifiers("internal unsafe partial");
        assert_eq!(method.modifiers_without_partial(), "internal unsafe");
    }

    #[test]
    fn return_kinds() {
        assert!(MethodInfo::new("A", "void").returns_void());
        assert!(MethodInfo::new("B", "bool").returns_bool());
        assert!(!MethodInfo::new("C", "byte").returns_bool());
    }
}
