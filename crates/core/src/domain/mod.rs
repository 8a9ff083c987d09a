// Domain Layer - Mapping metadata shared by all platforms

pub mod mapping;

pub use mapping::{Mapped, MemberInfo, MemberKind, TypeInfo, Value, Visibility};
