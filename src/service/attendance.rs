use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::str::FromStr;

/// Records one status observation for (employee, date). Keyed upsert: the
/// first mark inserts, later marks overwrite the stored status in place.
/// Two concurrent marks for the same pair resolve through the UNIQUE
/// constraint's conflict clause, never into two rows.
pub async fn mark(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
    status: &str,
) -> Result<Attendance, ApiError> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let status = AttendanceStatus::from_str(status)
        .map_err(|_| ApiError::InvalidInput("Status must be Present or Absent".to_string()))?;

    let attendance = sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (employee_id, date, status)
        VALUES (?, ?, ?)
        ON CONFLICT (employee_id, date) DO UPDATE SET status = excluded.status
        RETURNING id, employee_id, date, status
        "#,
    )
    .bind(employee_id)
    .bind(date)
    .bind(status.to_string())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ApiError::on_fk_violation(e, "Employee not found"))?;

    tx.commit().await?;
    Ok(attendance)
}

/// Empty result for an unknown employee, not an error.
pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<Attendance>, ApiError> {
    let rows = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All rows on a date, enriched with the owning employee. The inner join
/// drops any row whose employee reference cannot be resolved.
pub async fn list_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Vec<AttendanceWithEmployee>, ApiError> {
    let rows = sqlx::query_as::<_, AttendanceWithEmployee>(
        r#"
        SELECT
            a.id,
            a.employee_id,
            a.date,
            a.status,
            e.full_name AS employee_name,
            e.employee_id AS employee_code,
            e.department
        FROM attendance a
        JOIN employees e ON e.id = a.employee_id
        WHERE a.date = ?
        ORDER BY a.id
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Attendance>, ApiError> {
    let rows = sqlx::query_as::<_, Attendance>("SELECT * FROM attendance ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use crate::service::employee::{self, EmployeeInput};
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    async fn seed_employee(pool: &SqlitePool, code: &str, email: &str) -> i64 {
        employee::create(
            pool,
            &EmployeeInput {
                employee_id: code.to_string(),
                full_name: "A".to_string(),
                email: email.to_string(),
                department: "Eng".to_string(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    #[actix_web::test]
    async fn marking_twice_keeps_one_row_with_latest_status() {
        let pool = test_pool().await;
        let id = seed_employee(&pool, "E1", "a@x.com").await;

        let first = mark(&pool, id, date("2024-01-01"), "Present").await.unwrap();
        let second = mark(&pool, id, date("2024-01-01"), "Absent").await.unwrap();
        assert_eq!(first.id, second.id);

        let rows = list_for_employee(&pool, id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "Absent");
    }

    #[actix_web::test]
    async fn mark_for_unknown_employee_is_not_found_and_creates_nothing() {
        let pool = test_pool().await;

        let err = mark(&pool, 999, date("2024-01-01"), "Present")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(list_all(&pool).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn invalid_status_is_rejected() {
        let pool = test_pool().await;
        let id = seed_employee(&pool, "E1", "a@x.com").await;

        let err = mark(&pool, id, date("2024-01-01"), "Late").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        // Case-sensitive: lowercase variant is invalid too.
        let err = mark(&pool, id, date("2024-01-01"), "present")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));

        assert!(list_all(&pool).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn marks_on_different_dates_accumulate() {
        let pool = test_pool().await;
        let id = seed_employee(&pool, "E1", "a@x.com").await;

        mark(&pool, id, date("2024-01-01"), "Present").await.unwrap();
        mark(&pool, id, date("2024-01-02"), "Absent").await.unwrap();

        assert_eq!(list_for_employee(&pool, id).await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn list_for_unknown_employee_is_empty_not_error() {
        let pool = test_pool().await;
        assert!(list_for_employee(&pool, 42).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn list_for_date_enriches_with_employee_info() {
        let pool = test_pool().await;
        let first = seed_employee(&pool, "E1", "a@x.com").await;
        let second = seed_employee(&pool, "E2", "b@x.com").await;

        mark(&pool, first, date("2024-01-01"), "Present").await.unwrap();
        mark(&pool, second, date("2024-01-01"), "Absent").await.unwrap();
        mark(&pool, first, date("2024-01-02"), "Absent").await.unwrap();

        let rows = list_for_date(&pool, date("2024-01-01")).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].employee_code, "E1");
        assert_eq!(rows[0].employee_name, "A");
        assert_eq!(rows[0].department, "Eng");
        assert_eq!(rows[1].employee_code, "E2");
        assert_eq!(rows[1].status, "Absent");
    }

    #[actix_web::test]
    async fn deleting_an_employee_removes_only_its_attendance() {
        let pool = test_pool().await;
        let first = seed_employee(&pool, "E1", "a@x.com").await;
        let second = seed_employee(&pool, "E2", "b@x.com").await;

        mark(&pool, first, date("2024-01-01"), "Present").await.unwrap();
        mark(&pool, second, date("2024-01-01"), "Present").await.unwrap();

        employee::delete(&pool, first).await.unwrap();

        let remaining = list_all(&pool).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].employee_id, second);

        // No dangling rows ever reach the date view.
        let joined = list_for_date(&pool, date("2024-01-01")).await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].employee_code, "E2");
    }
}
