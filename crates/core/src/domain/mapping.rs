// Mapping Metadata (replaces runtime reflection)

use serde::{Deserialize, Serialize};

/// Column value read from a mapped object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Kind of a declared member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberKind {
    Property,
    Field,
    Method,
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberKind::Property => write!(f, "PROPERTY"),
            MemberKind::Field => write!(f, "FIELD"),
            MemberKind::Method => write!(f, "METHOD"),
        }
    }
}

/// Accessor visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    NonPublic,
}

/// One declared member of a mapped type
///
/// Built in `const` context so mapping tables can live in statics:
///
/// ```text
/// static MEMBERS: [MemberInfo; 2] = [
///     MemberInfo::property("id"),
///     MemberInfo::property("cache").ignored(),
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemberInfo {
    pub name: &'static str,
    pub kind: MemberKind,
    pub getter: Option<Visibility>,
    pub setter: Option<Visibility>,
    pub is_static: bool,
    pub ignored: bool,
}

impl MemberInfo {
    /// Public read/write instance property
    pub const fn property(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
            getter: Some(Visibility::Public),
            setter: Some(Visibility::Public),
            is_static: false,
            ignored: false,
        }
    }

    /// Public instance field
    pub const fn field(name: &'static str) -> Self {
        Self {
            kind: MemberKind::Field,
            ..Self::property(name)
        }
    }

    pub const fn method(name: &'static str) -> Self {
        Self {
            kind: MemberKind::Method,
            getter: None,
            setter: None,
            ..Self::property(name)
        }
    }

    pub const fn with_getter(self, getter: Option<Visibility>) -> Self {
        Self { getter, ..self }
    }

    pub const fn with_setter(self, setter: Option<Visibility>) -> Self {
        Self { setter, ..self }
    }

    pub const fn static_member(self) -> Self {
        Self {
            is_static: true,
            ..self
        }
    }

    /// Excluded from column mapping
    pub const fn ignored(self) -> Self {
        Self {
            ignored: true,
            ..self
        }
    }

    pub fn can_read(&self) -> bool {
        self.getter.is_some()
    }

    pub fn can_write(&self) -> bool {
        self.setter.is_some()
    }

    /// Has at least one public accessor
    pub fn is_public(&self) -> bool {
        self.getter == Some(Visibility::Public) || self.setter == Some(Visibility::Public)
    }
}

/// Static description of a mapped type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub name: &'static str,
    /// Table name override; defaults to the type name
    pub table_name: Option<&'static str>,
    pub members: &'static [MemberInfo],
}

impl TypeInfo {
    pub const fn new(name: &'static str, members: &'static [MemberInfo]) -> Self {
        Self {
            name,
            table_name: None,
            members,
        }
    }

    pub const fn with_table_name(self, table_name: &'static str) -> Self {
        Self {
            table_name: Some(table_name),
            ..self
        }
    }

    pub fn table_name(&self) -> &'static str {
        self.table_name.unwrap_or(self.name)
    }

    pub fn member(&self, name: &str) -> Option<&'static MemberInfo> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// A type whose members can be read for persistence
///
/// Implemented explicitly (or by code generation) for each persisted type,
/// in place of runtime introspection.
pub trait Mapped: Send + Sync {
    /// Static metadata of the concrete type
    fn type_info(&self) -> &'static TypeInfo;

    /// Current value of a declared property or field
    ///
    /// Returns `None` if the member is not readable on this object.
    fn member_value(&self, member: &str) -> Option<Value>;
}
