use crate::error::ApiError;
use crate::model::employee::Employee;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

/// Full field set for create and update; both operations overwrite
/// every mutable field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EmployeeInput {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

/// Creates an employee. Both uniqueness checks and the insert run in one
/// transaction; the employee_id check takes precedence over the email check.
pub async fn create(pool: &SqlitePool, input: &EmployeeInput) -> Result<Employee, ApiError> {
    let mut tx = pool.begin().await?;

    let code_taken: Option<i64> =
        sqlx::query_scalar("SELECT id FROM employees WHERE employee_id = ?")
            .bind(&input.employee_id)
            .fetch_optional(&mut *tx)
            .await?;
    if code_taken.is_some() {
        return Err(ApiError::Conflict("Employee ID already exists".to_string()));
    }

    let email_taken: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE email = ?")
        .bind(&input.email)
        .fetch_optional(&mut *tx)
        .await?;
    if email_taken.is_some() {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    // A concurrent create can still slip past the checks above; the UNIQUE
    // constraints turn that into a Conflict rather than a duplicate row.
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        RETURNING id, employee_id, full_name, email, department
        "#,
    )
    .bind(&input.employee_id)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.department)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ApiError::on_unique_violation(e, "Employee ID or email already exists"))?;

    tx.commit().await?;
    Ok(employee)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

/// Replaces all mutable fields of the employee with the given surrogate id.
/// Uniqueness is re-checked against all *other* employees, so writing back
/// an unchanged employee_id or email never self-conflicts.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &EmployeeInput,
) -> Result<Employee, ApiError> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let code_taken: Option<i64> =
        sqlx::query_scalar("SELECT id FROM employees WHERE employee_id = ? AND id != ?")
            .bind(&input.employee_id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    if code_taken.is_some() {
        return Err(ApiError::Conflict("Employee ID already exists".to_string()));
    }

    let email_taken: Option<i64> =
        sqlx::query_scalar("SELECT id FROM employees WHERE email = ? AND id != ?")
            .bind(&input.email)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    if email_taken.is_some() {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        UPDATE employees
        SET employee_id = ?, full_name = ?, email = ?, department = ?
        WHERE id = ?
        RETURNING id, employee_id, full_name, email, department
        "#,
    )
    .bind(&input.employee_id)
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.department)
    .bind(id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ApiError::on_unique_violation(e, "Employee ID or email already exists"))?;

    tx.commit().await?;
    Ok(employee)
}

/// Deletes the employee and all of its attendance rows atomically.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
