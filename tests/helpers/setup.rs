use fincv_api::Application;
use fincv_infra::FincvContext;
use fincv_sdk::FincvSDK;

pub struct TestApp {
    pub ctx: FincvContext,
    pub address: String,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, FincvSDK) {
    spawn_app_with(|_| {}).await
}

/// Same as `spawn_app` but lets the test swap out parts of the context,
/// e.g. the clock or the ocr provider, before the server starts
pub async fn spawn_app_with<F>(configure: F) -> (TestApp, FincvSDK)
where
    F: FnOnce(&mut FincvContext),
{
    let mut ctx = FincvContext::create_inmemory();
    ctx.config.port = 0; // Random port
    configure(&mut ctx);

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = FincvSDK::new(address.clone());
    (TestApp { ctx, address }, sdk)
}
