//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrowers, health, instructors, stats, tools, transactions, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ToolTrack API",
        version = "0.1.0",
        description = "Workshop Tool Lending Tracker REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Tools
        tools::list_tools,
        tools::get_tool,
        tools::create_tool,
        tools::update_tool,
        tools::delete_tool,
        // Transactions
        transactions::list_transactions,
        transactions::get_transaction,
        transactions::create_transaction,
        transactions::complete_transaction,
        transactions::return_tool,
        transactions::turn_over_tool,
        transactions::transaction_code,
        // Instructors
        instructors::list_instructors,
        instructors::get_instructor,
        instructors::create_instructor,
        instructors::update_shift_time,
        instructors::list_returned,
        instructors::turn_over_all,
        // Borrowers
        borrowers::list_borrowers,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Tools
            crate::models::tool::Tool,
            crate::models::tool::ToolStatus,
            crate::models::tool::ToolCondition,
            crate::models::tool::CreateTool,
            crate::models::tool::UpdateTool,
            // Transactions
            crate::models::transaction::Transaction,
            crate::models::transaction::TransactionStatus,
            crate::models::transaction::CreateTransaction,
            crate::models::transaction::CompleteTransaction,
            transactions::CreateTransactionResponse,
            // Instructors
            crate::models::instructor::Instructor,
            crate::models::instructor::InstructorToolStatus,
            crate::models::instructor::CreateInstructor,
            crate::models::instructor::UpdateShiftTime,
            // Borrowers
            crate::models::borrower::Borrower,
            // Users
            crate::models::user::User,
            crate::models::user::UserRole,
            crate::models::user::UserStatus,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Stats
            stats::StatsResponse,
            stats::TransactionCounts,
            // Health
            health::HealthResponse,
            // Shared
            crate::api::StatusMessage,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tools", description = "Tool inventory management"),
        (name = "transactions", description = "Lending transaction ledger"),
        (name = "instructors", description = "Instructor registry and shift times"),
        (name = "borrowers", description = "Borrower directory"),
        (name = "users", description = "Administrative accounts"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
