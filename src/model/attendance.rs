use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Closed status set; `FromStr` is exact-match and case-sensitive,
/// so "present" or "Late" are rejected at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1,
        "date": "2024-01-01",
        "status": "Present"
    })
)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    /// Surrogate id of the owning employee, not the external code.
    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,
}

/// Attendance row joined with the owning employee, for the by-date view.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1,
        "date": "2024-01-01",
        "status": "Present",
        "employee_name": "John Doe",
        "employee_code": "EMP-001",
        "department": "Engineering"
    })
)]
pub struct AttendanceWithEmployee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: String,

    #[schema(example = "John Doe")]
    pub employee_name: String,

    #[schema(example = "EMP-001")]
    pub employee_code: String,

    #[schema(example = "Engineering")]
    pub department: String,
}
