use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceWithEmployee};
use crate::service::attendance as ledger;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendance {
    /// Surrogate id of the employee being marked.
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// "Present" or "Absent", exact match.
    #[schema(example = "Present")]
    pub status: String,
}

/// Mark Attendance
///
/// Upsert keyed on (employee, date): re-marking the same day overwrites
/// the stored status instead of adding a row.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = Attendance),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 400, description = "Invalid status", body = Object, example = json!({
            "message": "Status must be Present or Absent"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let attendance = ledger::mark(
        pool.get_ref(),
        payload.employee_id,
        payload.date,
        &payload.status,
    )
    .await?;
    Ok(HttpResponse::Ok().json(attendance))
}

/// List Attendance for an Employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(("employee_id", Path, description = "Employee surrogate ID")),
    responses(
        (status = 200, description = "Attendance rows for the employee; empty if unknown", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let rows = ledger::list_for_employee(pool.get_ref(), employee_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// List Attendance by Date
#[utoipa::path(
    get,
    path = "/attendance/date/{date}",
    params(("date", Path, description = "Calendar date (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Attendance on the date, joined with employee info", body = [AttendanceWithEmployee])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance_by_date(
    pool: web::Data<SqlitePool>,
    path: web::Path<NaiveDate>,
) -> Result<HttpResponse, ApiError> {
    let date = path.into_inner();
    let rows = ledger::list_for_date(pool.get_ref(), date).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// List All Attendance
#[utoipa::path(
    get,
    path = "/attendance",
    responses(
        (status = 200, description = "Every attendance row", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn list_all_attendance(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let rows = ledger::list_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(rows))
}
