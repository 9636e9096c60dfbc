//! WebSocket lifecycle router function.

use lambda_runtime::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    quickstart_lambda::init_tracing();
    run(service_fn(quickstart_lambda::ws_router)).await
}
