// Reflection service implementation
// reason: static TypeInfo metadata stands in for runtime introspection
use tracing::debug;

use sqlnet_core::domain::{Mapped, MemberInfo, MemberKind, TypeInfo, Value};
use sqlnet_core::error::{PlatformError, Result};
use sqlnet_core::port::reflection::ReflectionService;

/// Reflection service for the generic platform
#[derive(Debug, Default, Clone, Copy)]
pub struct ReflectionServiceGeneric;

impl ReflectionServiceGeneric {
    pub fn new() -> Self {
        Self
    }
}

impl ReflectionService for ReflectionServiceGeneric {
    fn public_instance_properties<'a>(&self, mapped_type: &'a TypeInfo) -> Vec<&'a MemberInfo> {
        let props: Vec<&MemberInfo> = mapped_type
            .members
            .iter()
            .filter(|m| m.kind == MemberKind::Property)
            .filter(|m| m.is_public() || (m.is_static && (m.can_read() || m.can_write())))
            .collect();

        debug!(
            type_name = %mapped_type.name,
            declared = mapped_type.members.len(),
            properties = props.len(),
            "Properties enumerated"
        );

        props
    }

    fn member_value(&self, obj: &dyn Mapped, member: &MemberInfo) -> Result<Value> {
        let type_info = obj.type_info();

        if !matches!(member.kind, MemberKind::Property | MemberKind::Field) {
            return Err(PlatformError::UnsupportedMember {
                type_name: type_info.name.to_string(),
                member: member.name.to_string(),
                kind: member.kind,
            });
        }

        let unknown = || PlatformError::UnknownMember {
            type_name: type_info.name.to_string(),
            member: member.name.to_string(),
        };

        type_info.member(member.name).ok_or_else(unknown)?;
        obj.member_value(member.name).ok_or_else(unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlnet_core::domain::Visibility;

    static STOCK_MEMBERS: [MemberInfo; 7] = [
        MemberInfo::property("id"),
        MemberInfo::property("symbol"),
        MemberInfo::property("secret")
            .with_getter(Some(Visibility::NonPublic))
            .with_setter(Some(Visibility::NonPublic)),
        MemberInfo::property("instances")
            .with_getter(Some(Visibility::NonPublic))
            .with_setter(None)
            .static_member(),
        MemberInfo::property("computed").with_setter(None),
        MemberInfo::field("last_price"),
        MemberInfo::method("refresh"),
    ];

    static STOCK: TypeInfo = TypeInfo::new("Stock", &STOCK_MEMBERS);

    static OTHER_MEMBERS: [MemberInfo; 1] = [MemberInfo::property("name")];

    static OTHER: TypeInfo = TypeInfo::new("Other", &OTHER_MEMBERS);

    struct Stock {
        id: i64,
        symbol: String,
        last_price: f64,
    }

    impl Mapped for Stock {
        fn type_info(&self) -> &'static TypeInfo {
            &STOCK
        }

        fn member_value(&self, member: &str) -> Option<Value> {
            match member {
                "id" => Some(self.id.into()),
                "symbol" => Some(self.symbol.clone().into()),
                "last_price" => Some(self.last_price.into()),
                "computed" => Some(Value::Boolean(self.id > 0)),
                _ => None,
            }
        }
    }

    fn stock() -> Stock {
        Stock {
            id: 7,
            symbol: "MSFT".to_string(),
            last_price: 31.5,
        }
    }

    #[test]
    fn test_public_instance_properties_filter() {
        let service = ReflectionServiceGeneric::new();
        let names: Vec<&str> = service
            .public_instance_properties(&STOCK)
            .iter()
            .map(|m| m.name)
            .collect();

        // Non-public instance property, field and method are excluded;
        // static properties qualify with any accessor.
        assert_eq!(names, vec!["id", "symbol", "instances", "computed"]);
    }

    #[test]
    fn test_member_value_property_and_field() {
        let service = ReflectionServiceGeneric::new();
        let obj = stock();

        let symbol = STOCK.member("symbol").unwrap();
        assert_eq!(
            service.member_value(&obj, symbol).unwrap(),
            Value::Text("MSFT".to_string())
        );

        let price = STOCK.member("last_price").unwrap();
        assert_eq!(service.member_value(&obj, price).unwrap(), Value::Real(31.5));
    }

    #[test]
    fn test_member_value_method_unsupported() {
        let service = ReflectionServiceGeneric::new();
        let refresh = STOCK.member("refresh").unwrap();

        let err = service.member_value(&stock(), refresh).unwrap_err();
        assert!(matches!(
            err,
            PlatformError::UnsupportedMember {
                kind: MemberKind::Method,
                ..
            }
        ));
    }

    #[test]
    fn test_member_value_foreign_member_unknown() {
        let service = ReflectionServiceGeneric::new();
        let name = OTHER.member("name").unwrap();

        let err = service.member_value(&stock(), name).unwrap_err();
        assert_eq!(err.to_string(), "Unknown member: Stock.name");
    }

    #[test]
    fn test_member_value_unreadable_member_unknown() {
        let service = ReflectionServiceGeneric::new();
        let secret = STOCK.member("secret").unwrap();

        assert!(matches!(
            service.member_value(&stock(), secret),
            Err(PlatformError::UnknownMember { .. })
        ));
    }

    #[test]
    fn test_properties_serialize_for_diagnostics() {
        let service = ReflectionServiceGeneric::new();
        let props = service.public_instance_properties(&STOCK);

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json[0]["name"], "id");
        assert_eq!(json[2]["is_static"], true);
    }
}
