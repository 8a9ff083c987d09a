//! Shared fixtures for the integration tests

use sqlnet_core::domain::{Mapped, MemberInfo, TypeInfo, Value, Visibility};

pub static VALUATION_MEMBERS: [MemberInfo; 5] = [
    MemberInfo::property("id"),
    MemberInfo::property("stock_id"),
    MemberInfo::property("price"),
    MemberInfo::property("audit")
        .with_getter(Some(Visibility::NonPublic))
        .with_setter(Some(Visibility::NonPublic)),
    MemberInfo::property("label").ignored(),
];

pub static VALUATION: TypeInfo =
    TypeInfo::new("Valuation", &VALUATION_MEMBERS).with_table_name("valuations");

/// A row of the `valuations` table
#[derive(Debug, Clone)]
pub struct Valuation {
    pub id: i64,
    pub stock_id: i64,
    pub price: f64,
    pub label: Option<String>,
}

impl Mapped for Valuation {
    fn type_info(&self) -> &'static TypeInfo {
        &VALUATION
    }

    fn member_value(&self, member: &str) -> Option<Value> {
        match member {
            "id" => Some(self.id.into()),
            "stock_id" => Some(self.stock_id.into()),
            "price" => Some(self.price.into()),
            "label" => Some(self.label.clone().into()),
            _ => None,
        }
    }
}
