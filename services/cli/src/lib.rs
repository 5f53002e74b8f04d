mod cli;
mod commands;

use pathway::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
