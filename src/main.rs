use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(err) = crudcloud_backend::run().await {
        error!("Backend exited with error: {}", err);
        std::process::exit(1);
    }
}
