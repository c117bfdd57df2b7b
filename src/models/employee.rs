use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;
use crate::utils::coerce;
use crate::utils::validation::validate_payload;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: i32,
    pub age: String,
}

/// Create payload after coercion from the raw field-bag.
///
/// An `id` key is tolerated but never read; ids are always generated.
#[derive(Deserialize, Validate, Debug)]
#[serde(deny_unknown_fields)]
pub struct NewEmployee {
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    #[validate(required)]
    #[serde(default, deserialize_with = "coerce::lenient_string")]
    pub name: Option<String>,
    #[validate(required)]
    #[serde(default, deserialize_with = "coerce::lenient_i32")]
    pub salary: Option<i32>,
    #[validate(required)]
    #[serde(default, deserialize_with = "coerce::lenient_string")]
    pub age: Option<String>,
}

impl NewEmployee {
    /// Coerces the field-bag into typed fields, returning a description of
    /// the first problem found.
    pub fn from_field_bag(input: &Map<String, Value>) -> Result<Self, String> {
        let new_employee: NewEmployee = serde_json::from_value(Value::Object(input.clone()))
            .map_err(|err| err.to_string())?;
        validate_payload(&new_employee)?;
        Ok(new_employee)
    }

    /// `None` if a required field is still missing.
    pub fn into_employee(self, id: String) -> Option<Employee> {
        Some(Employee {
            id,
            name: self.name?,
            salary: self.salary?,
            age: self.age?,
        })
    }
}
