mod cli;
mod render;

use shift_offers::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
