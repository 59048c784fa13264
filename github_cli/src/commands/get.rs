use anyhow::Result;
use clap::Args;
use github_api::Client;

use crate::output::{print_error, print_json, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Request path, e.g. /repos/octocat/Hello-World
    pub path: String,
}

/// Runs the request and returns the process exit code.
pub async fn run(args: &GetArgs, client: &Client, format: &OutputFormat) -> Result<i32> {
    match client.get_json(&args.path).await {
        Ok(value) => {
            print_json(&value)?;
            Ok(0)
        }
        Err(err) => {
            print_error(&err, format)?;
            Ok(1)
        }
    }
}
