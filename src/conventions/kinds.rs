//! What a naming rule can match on: symbol or type kind, accessibility, modifiers.

/// The kind of a symbol being named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Alias,
    Event,
    Field,
    Label,
    Local,
    Method,
    NamedType,
    Namespace,
    Parameter,
    Property,
    RangeVariable,
    TypeParameter,
}

/// The kind of a type being named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Delegate,
    Enum,
    Interface,
    Module,
    Struct,
    TypeParameter,
}

/// Either a symbol kind or a type kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKindOrTypeKind {
    Symbol(SymbolKind),
    Type(TypeKind),
}

impl From<SymbolKind> for SymbolKindOrTypeKind {
    fn from(kind: SymbolKind) -> Self {
        Self::Symbol(kind)
    }
}

impl From<TypeKind> for SymbolKindOrTypeKind {
    fn from(kind: TypeKind) -> Self {
        Self::Type(kind)
    }
}

impl SymbolKindOrTypeKind {
    /// Get a display string for this kind.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Symbol(kind) => match kind {
                SymbolKind::Alias => "alias",
                SymbolKind::Event => "event",
                SymbolKind::Field => "field",
                SymbolKind::Label => "label",
                SymbolKind::Local => "local",
                SymbolKind::Method => "method",
                SymbolKind::NamedType => "type",
                SymbolKind::Namespace => "namespace",
                SymbolKind::Parameter => "parameter",
                SymbolKind::Property => "property",
                SymbolKind::RangeVariable => "range variable",
                SymbolKind::TypeParameter => "type parameter",
            },
            Self::Type(kind) => match kind {
                TypeKind::Class => "class",
                TypeKind::Delegate => "delegate",
                TypeKind::Enum => "enum",
                TypeKind::Interface => "interface",
                TypeKind::Module => "module",
                TypeKind::Struct => "struct",
                TypeKind::TypeParameter => "type parameter",
            },
        }
    }
}

/// Declared accessibility of a symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Accessibility {
    #[default]
    NotApplicable,
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

impl Accessibility {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotApplicable => "not applicable",
            Self::Private => "private",
            Self::PrivateProtected => "private protected",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::Public => "public",
        }
    }
}

bitflags::bitflags! {
    /// Modifiers present on a declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeclarationModifiers: u16 {
        const ABSTRACT = 1 << 0;
        const ASYNC = 1 << 1;
        const CONST = 1 << 2;
        const NEW = 1 << 3;
        const OVERRIDE = 1 << 4;
        const PARTIAL = 1 << 5;
        const READ_ONLY = 1 << 6;
        const REF = 1 << 7;
        const SEALED = 1 << 8;
        const STATIC = 1 << 9;
        const UNSAFE = 1 << 10;
        const VIRTUAL = 1 << 11;
        const WITH_EVENTS = 1 << 12;
        const WRITE_ONLY = 1 << 13;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_conversions() {
        let kind: SymbolKindOrTypeKind = SymbolKind::Field.into();
        assert_eq!(kind, SymbolKindOrTypeKind::Symbol(SymbolKind::Field));
        let kind: SymbolKindOrTypeKind = TypeKind::Struct.into();
        assert_eq!(kind.display(), "struct");
    }

    #[test]
    fn test_modifiers_compose() {
        let modifiers = DeclarationModifiers::STATIC | DeclarationModifiers::READ_ONLY;
        assert!(modifiers.contains(DeclarationModifiers::STATIC));
        assert!(!modifiers.contains(DeclarationModifiers::CONST));
        assert!(modifiers.contains(DeclarationModifiers::empty()));
    }

    #[test]
    fn test_accessibility_default() {
        assert_eq!(Accessibility::default(), Accessibility::NotApplicable);
        assert_eq!(Accessibility::ProtectedInternal.as_str(), "protected internal");
    }
}
