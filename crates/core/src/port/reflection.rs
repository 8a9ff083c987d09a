// Reflection Port (type introspection for column mapping)

use crate::domain::{Mapped, MemberInfo, TypeInfo, Value};
use crate::error::Result;

/// Introspection capability used by the mapping layer
///
/// Platforms forward to whatever metadata source they have; the generic
/// platform reads the static `TypeInfo` each `Mapped` type declares.
pub trait ReflectionService: Send + Sync {
    /// Properties eligible for column mapping, in declaration order
    ///
    /// # Returns
    /// Members of kind `Property` with a public accessor, or with any
    /// accessor when static.
    fn public_instance_properties<'a>(&self, mapped_type: &'a TypeInfo) -> Vec<&'a MemberInfo>;

    /// Read a member's current value from `obj`
    ///
    /// # Errors
    /// - `UnsupportedMember` for members that are neither property nor field
    /// - `UnknownMember` if `obj` does not declare or yield the member
    fn member_value(&self, obj: &dyn Mapped, member: &MemberInfo) -> Result<Value>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::PlatformError;

    /// Reflection service that exposes every declared member
    pub struct PassthroughReflectionService;

    impl ReflectionService for PassthroughReflectionService {
        fn public_instance_properties<'a>(
            &self,
            mapped_type: &'a TypeInfo,
        ) -> Vec<&'a MemberInfo> {
            mapped_type.members.iter().collect()
        }

        fn member_value(&self, obj: &dyn Mapped, member: &MemberInfo) -> Result<Value> {
            obj.member_value(member.name)
                .ok_or_else(|| PlatformError::UnknownMember {
                    type_name: obj.type_info().name.to_string(),
                    member: member.name.to_string(),
                })
        }
    }
}
