mod telemetry;

use fincv_api::Application;
use fincv_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("fincv_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await.map_err(std::io::Error::other)?;

    let app = Application::new(context).await?;
    app.start().await
}
