use crate::error::ApiError;
use crate::model::employee::Employee;
use crate::service::employee as directory;
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::info;

pub use crate::service::employee::EmployeeInput;

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Duplicate employee ID or email", body = Object, example = json!({
            "message": "Employee ID already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    let employee = directory::create(pool.get_ref(), &payload).await?;
    info!(id = employee.id, code = %employee.employee_id, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = directory::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id", Path, description = "Employee surrogate ID")),
    request_body = EmployeeInput,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 400, description = "Duplicate employee ID or email"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<EmployeeInput>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let employee = directory::update(pool.get_ref(), id, &payload).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id", Path, description = "Employee surrogate ID")),
    responses(
        (status = 200, description = "Employee and its attendance deleted", body = Object, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    directory::delete(pool.get_ref(), id).await?;
    info!(id, "Employee deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}
