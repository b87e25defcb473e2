//! Classes and their members.
//!
//! A [`ModelClass`] describes one class, interface, or enum: its qualified
//! name (the diagram node identifier), its kind, and its fields and methods
//! in declaration order. Members expose only the narrow surface the renderer
//! needs through the [`Member`] trait.

use crate::identifier::Id;

/// The kind of a class-like declaration. Selects the diagram header keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

/// Member visibility tag.
///
/// The renderer maps each tag to a single glyph; `Private` is also the
/// defensive default for anything the extractor could not classify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    #[default]
    Private,
}

/// A reference to a type, with optional generic type arguments.
///
/// Type references form a tree: each argument is itself a full
/// `TypeReference`, so arbitrary generic nesting (`Map<String, List<Foo>>`)
/// is representable. They cannot cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    name: String,
    args: Vec<TypeReference>,
}

impl TypeReference {
    /// Creates a reference to a non-generic type.
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::model::TypeReference;
    ///
    /// let string = TypeReference::simple("String");
    /// assert!(string.args().is_empty());
    /// ```
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a reference to a generic type with the given type arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::model::TypeReference;
    ///
    /// let list_of_string = TypeReference::generic(
    ///     "List",
    ///     vec![TypeReference::simple("String")],
    /// );
    /// assert_eq!(list_of_string.args().len(), 1);
    /// ```
    pub fn generic(name: impl Into<String>, args: Vec<TypeReference>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Returns the simple type name, without type arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the generic type arguments, in declaration order.
    /// Empty for non-generic types.
    pub fn args(&self) -> &[TypeReference] {
        &self.args
    }
}

/// Narrow member surface the renderer depends on.
///
/// Extractors work with much richer documentation objects; the renderer only
/// ever needs the name, the visibility tag, and the static/abstract flags,
/// so it is written against this trait rather than any concrete member type.
pub trait Member {
    /// The member's declared name.
    fn name(&self) -> &str;

    /// The member's visibility tag.
    fn visibility(&self) -> Visibility;

    /// Whether the member is declared static.
    fn is_static(&self) -> bool;

    /// Whether the member is declared abstract. Fields are never abstract.
    fn is_abstract(&self) -> bool {
        false
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    type_ref: TypeReference,
    visibility: Visibility,
    is_static: bool,
}

impl Field {
    /// Creates a new field descriptor.
    pub fn new(
        name: impl Into<String>,
        type_ref: TypeReference,
        visibility: Visibility,
        is_static: bool,
    ) -> Self {
        Self {
            name: name.into(),
            type_ref,
            visibility,
            is_static,
        }
    }

    /// Returns the field's declared type.
    pub fn type_ref(&self) -> &TypeReference {
        &self.type_ref
    }
}

impl Member for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn is_static(&self) -> bool {
        self.is_static
    }
}

/// A method parameter: a name and a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    type_ref: TypeReference,
}

impl Parameter {
    /// Creates a new parameter descriptor.
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter's declared type.
    pub fn type_ref(&self) -> &TypeReference {
        &self.type_ref
    }
}

/// A method declaration.
///
/// Overloaded methods (same name, different parameters) are distinct
/// descriptors and are never merged by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    return_type: TypeReference,
    params: Vec<Parameter>,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
}

impl Method {
    /// Creates a new method descriptor with no parameters.
    pub fn new(
        name: impl Into<String>,
        return_type: TypeReference,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            params: Vec::new(),
            visibility,
            is_static: false,
            is_abstract: false,
        }
    }

    /// Appends a parameter, preserving declaration order.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Marks the method static.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Marks the method abstract.
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Returns the declared return type.
    pub fn return_type(&self) -> &TypeReference {
        &self.return_type
    }

    /// Returns the parameters in declaration order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }
}

impl Member for Method {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn is_static(&self) -> bool {
        self.is_static
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }
}

/// One class, interface, or enum in the model.
///
/// The qualified name is the diagram node identifier and must be unique
/// within a [`Model`](crate::model::Model). Fields and methods keep their
/// declaration order; the renderer emits them in that order.
#[derive(Debug, Clone)]
pub struct ModelClass {
    id: Id,
    kind: ClassKind,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl ModelClass {
    /// Creates an empty class with the given qualified name and kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use umldoc_core::identifier::Id;
    /// use umldoc_core::model::{ClassKind, ModelClass};
    ///
    /// let class = ModelClass::new(Id::new("com.acme.Order"), ClassKind::Class);
    /// assert_eq!(class.qualified_name(), "com.acme.Order");
    /// ```
    pub fn new(id: Id, kind: ClassKind) -> Self {
        Self {
            id,
            kind,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Appends a field, preserving declaration order.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a method, preserving declaration order.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Returns the qualified name used as the diagram node identifier.
    pub fn qualified_name(&self) -> Id {
        self.id
    }

    /// Returns the class kind.
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the methods in declaration order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}
