use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "car_type")]
pub enum CarType {
    #[sea_orm(string_value = "Sedan")]
    Sedan,
    #[sea_orm(string_value = "SUV")]
    #[serde(rename = "SUV")]
    Suv,
    #[sea_orm(string_value = "Tempo")]
    Tempo,
    #[sea_orm(string_value = "Bus")]
    Bus,
}

impl CarType {
    /// Parses the value the booking form submits. Returns `None` for
    /// anything outside the fixed fleet list.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Sedan" => Some(Self::Sedan),
            "SUV" => Some(Self::Suv),
            "Tempo" => Some(Self::Tempo),
            "Bus" => Some(Self::Bus),
            _ => None,
        }
    }
}

impl std::fmt::Display for CarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Tempo => "Tempo",
            Self::Bus => "Bus",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[serde(rename = "from")]
    pub from_location: String,
    #[serde(rename = "to")]
    pub to_location: String,
    #[serde(rename = "date")]
    pub travel_date: DateTimeWithTimeZone,
    pub passengers: i32,
    pub car_type: CarType,
    pub phone_number: String,
    pub email: String,
    pub status: BookingStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_fleet_list_only() {
        assert_eq!(CarType::parse("Sedan"), Some(CarType::Sedan));
        assert_eq!(CarType::parse("SUV"), Some(CarType::Suv));
        assert_eq!(CarType::parse("Tempo"), Some(CarType::Tempo));
        assert_eq!(CarType::parse("Bus"), Some(CarType::Bus));
        assert_eq!(CarType::parse("suv"), None);
        assert_eq!(CarType::parse("Truck"), None);
    }

    #[test]
    fn statuses_serialize_in_wire_format() {
        assert_eq!(
            serde_json::to_value(BookingStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
        assert_eq!(
            serde_json::to_value(CarType::Suv).unwrap(),
            serde_json::json!("SUV")
        );
    }
}
