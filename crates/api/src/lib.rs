mod account;
mod document;
mod error;
pub mod job_schedulers;
mod ocr;
mod reminder;
mod shared;
mod status;
mod transaction;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use fincv_infra::FincvContext;
use job_schedulers::{start_transaction_reminders_job, ReminderJob};
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::FincvError;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    account::configure_routes(cfg);
    document::configure_routes(cfg);
    ocr::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
    transaction::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    context: FincvContext,
}

impl Application {
    pub async fn new(context: FincvContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;

        Ok(Self {
            server,
            port,
            context,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: FincvContext) -> ReminderJob {
        start_transaction_reminders_job(context)
    }

    async fn configure_server(context: FincvContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves requests and runs the reminder job until the server stops.
    /// The job is stopped once the server has shut down.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let job = Application::start_job_schedulers(self.context);
        info!("Listening on port: {}", self.port);

        let res = self.server.await;
        job.stop().await;
        res
    }
}
