mod cli;
mod console;
mod infra;
mod routes;
mod server;

use analyst_fit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
