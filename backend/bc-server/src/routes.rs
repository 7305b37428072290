use crate::{
    AppState, add_employee, admin_visualization, create_business_unit, create_department,
    create_sub_function, create_vendor, critical_systems_config, database_visualization,
    delete_business_unit, delete_sub_function, delete_vendor, export_critical_systems,
    export_users, health, list_critical_systems, list_departments, list_users, login, register,
    remove_employee, update_business_unit, update_critical_system, update_rto,
    update_sub_function, update_vendor,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Accounts
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/export-users", get(export_users))
        // Departments
        .route("/departments", get(list_departments).post(create_department))
        .route("/departments/{name}/add-employee", put(add_employee))
        .route("/departments/{name}/remove-employee", put(remove_employee))
        // Catalog
        .route("/subfunctions", post(create_sub_function))
        .route(
            "/subfunctions/{name}",
            put(update_sub_function).delete(delete_sub_function),
        )
        .route("/business-units", post(create_business_unit))
        .route(
            "/business-units/{name}",
            put(update_business_unit).delete(delete_business_unit),
        )
        .route("/vendors", post(create_vendor))
        .route(
            "/vendors/{name}",
            put(update_vendor).delete(delete_vendor),
        )
        .route("/update-critical-system", post(update_critical_system))
        .route("/get-critical-systems", get(list_critical_systems))
        .route("/update-rto", put(update_rto))
        .route("/critical-systems-config", get(critical_systems_config))
        .route("/export-critical-systems", get(export_critical_systems))
        .route("/database-visualization", get(database_visualization))
        .route("/admin-visualization", get(admin_visualization))
        // Add shared state
        .with_state(state)
        // Browser front end is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
