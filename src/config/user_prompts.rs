//! User interaction and prompts for configuration setup
//!
//! Handles first-run input collection when no config file exists yet.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the content API base URL and returns the trimmed input.
pub async fn prompt_for_api_base_url() -> Result<String, AppError> {
    println!("Please enter the content API base URL: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
