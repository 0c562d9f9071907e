use crate::api::{attendance, employee};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            // /attendance
            .service(
                web::resource("")
                    .route(web::post().to(attendance::mark_attendance))
                    .route(web::get().to(attendance::list_all_attendance)),
            )
            // /attendance/date/{date} — registered before the catch-all id route
            .service(
                web::resource("/date/{date}")
                    .route(web::get().to(attendance::list_attendance_by_date)),
            )
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}").route(web::get().to(attendance::list_attendance)),
            ),
    );
}
