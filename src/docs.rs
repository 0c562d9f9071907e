use crate::api::attendance::MarkAttendance;
use crate::api::employee::EmployeeInput;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A minimal HR record-keeping API for employees and their daily attendance.

### Key Features
- **Employee Directory**
  - Create, update, list, and delete employee records with unique employee codes and emails
- **Attendance Ledger**
  - Mark daily Present/Absent status per employee (re-marking a day overwrites it)
  - Query attendance per employee, per date (with employee info), or in full

Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::list_attendance_by_date,
        crate::api::attendance::list_all_attendance,
    ),
    components(
        schemas(
            Employee,
            EmployeeInput,
            Attendance,
            AttendanceStatus,
            AttendanceWithEmployee,
            MarkAttendance,
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;
