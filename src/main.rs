use std::process::ExitCode;

use cci_csw_probe::console::app;

#[tokio::main]
async fn main() -> ExitCode {
    let status = app::run().await;

    ExitCode::from(status.exit_code())
}
