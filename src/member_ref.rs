//! Canonical documentation keys for reflected C# elements
//!
//! The compiler writes one `<member name="...">` entry per documented element
//! into an assembly's sidecar XML file. This module models a reflected
//! element and derives the key string its entry is stored under:
//! `T:Ns.Type`, `M:Ns.Type.Method(Ns.Param1,Ns.Param2)`, `F:Ns.Type.Field`
//! and so on.

use serde::{Deserialize, Serialize};

/// Member token used for constructors in documentation keys
pub const CONSTRUCTOR_TOKEN: &str = "#ctor";

/// A parameter type as it appears in a method's documentation key
///
/// `full_name` is the fully qualified type name (e.g. "System.Int32"). For a
/// constructed generic type it is the CLR name including the backtick arity
/// suffix (e.g. "System.Collections.Generic.List`1") and `generic_args`
/// holds the type arguments' full names in declaration order. Arguments are
/// rendered with their own full name as-is; generic arguments of arguments
/// are not expanded further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamType {
    pub full_name: String,
    pub generic_args: Vec<String>,
}

impl ParamType {
    /// A non-generic parameter type
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            generic_args: Vec::new(),
        }
    }

    /// A constructed generic parameter type with one level of type arguments
    pub fn generic(full_name: impl Into<String>, generic_args: Vec<String>) -> Self {
        Self {
            full_name: full_name.into(),
            generic_args,
        }
    }

    /// Render this type the way it appears inside a key's parameter list
    ///
    /// Keys replace the CLR backtick-arity suffix with braced type arguments:
    /// ``List`1`` of `System.String` becomes `List{System.String}`.
    fn doc_name(&self) -> String {
        if self.generic_args.is_empty() {
            return self.full_name.clone();
        }
        let base = match self.full_name.find('`') {
            Some(pos) => &self.full_name[..pos],
            None => self.full_name.as_str(),
        };
        format!("{}{{{}}}", base, self.generic_args.join(","))
    }
}

/// A reflected C# program element documentation can be looked up for
///
/// Type names are fully qualified (namespace and type name); method and
/// constructor parameter types are in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRef {
    /// A class, struct, interface, enum or delegate
    Type { full_name: String },
    /// A field of `declaring_type`
    Field { declaring_type: String, name: String },
    /// A property of `declaring_type`
    Property { declaring_type: String, name: String },
    /// An event of `declaring_type`
    Event { declaring_type: String, name: String },
    /// A method of `declaring_type`
    Method {
        declaring_type: String,
        name: String,
        params: Vec<ParamType>,
    },
    /// A constructor of `declaring_type`
    Constructor {
        declaring_type: String,
        params: Vec<ParamType>,
    },
}

impl MemberRef {
    pub fn type_ref(full_name: impl Into<String>) -> Self {
        MemberRef::Type {
            full_name: full_name.into(),
        }
    }

    pub fn field(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        MemberRef::Field {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }

    pub fn property(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        MemberRef::Property {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }

    pub fn event(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        MemberRef::Event {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }

    pub fn method(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<ParamType>,
    ) -> Self {
        MemberRef::Method {
            declaring_type: declaring_type.into(),
            name: name.into(),
            params,
        }
    }

    pub fn constructor(declaring_type: impl Into<String>, params: Vec<ParamType>) -> Self {
        MemberRef::Constructor {
            declaring_type: declaring_type.into(),
            params,
        }
    }

    /// Derive the canonical key this element's documentation is stored under
    ///
    /// Methods with no parameters carry no parameter list and no parentheses.
    /// Constructors use the `#ctor` member token in place of a method name.
    pub fn doc_key(&self) -> String {
        match self {
            MemberRef::Type { full_name } => format!("T:{}", full_name),
            MemberRef::Field {
                declaring_type,
                name,
            } => format!("F:{}.{}", declaring_type, name),
            MemberRef::Property {
                declaring_type,
                name,
            } => format!("P:{}.{}", declaring_type, name),
            MemberRef::Event {
                declaring_type,
                name,
            } => format!("E:{}.{}", declaring_type, name),
            MemberRef::Method {
                declaring_type,
                name,
                params,
            } => method_key(declaring_type, name, params),
            MemberRef::Constructor {
                declaring_type,
                params,
            } => method_key(declaring_type, CONSTRUCTOR_TOKEN, params),
        }
    }
}

fn method_key(declaring_type: &str, name: &str, params: &[ParamType]) -> String {
    if params.is_empty() {
        return format!("M:{}.{}", declaring_type, name);
    }
    let rendered: Vec<String> = params.iter().map(ParamType::doc_name).collect();
    format!("M:{}.{}({})", declaring_type, name, rendered.join(","))
}

/// Whether a string has the shape of a canonical documentation key
///
/// Used to filter sidecar entries while building an index and to vet
/// inheritdoc cref targets before chasing them.
pub fn is_canonical_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    bytes.len() > 2 && bytes[1] == b':' && matches!(bytes[0], b'T' | b'M' | b'F' | b'P' | b'E')
}
