use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::content::Content;
use crate::provider_client::ProviderClient;
use crate::routes::{content, healthcheck, newsletter_settings, subscribe};

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings
    pub async fn build(config: Settings) -> anyhow::Result<Self> {
        // Load site content and build the provider client
        let site_content = Content::load(&config.content_path).with_context(|| {
            format!(
                "Failed to load site content from {}",
                config.content_path.display()
            )
        })?;
        let provider_client = config.provider.client()?;

        // Run the HTTP server and return its data
        let listener = net::TcpListener::bind(format!(
            "{}:{}",
            config.application.app_host, config.application.app_port
        ))?;
        let port = listener.local_addr()?.port();
        let server = run_server(listener, site_content, provider_client)?;
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server(
    listener: net::TcpListener,
    site_content: Content,
    provider_client: ProviderClient,
) -> anyhow::Result<Server> {
    // Prepare data to be added the application context
    let site_content = web::Data::new(site_content);
    let provider_client = web::Data::new(provider_client);

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/healthcheck", web::get().to(healthcheck))
            .service(
                web::scope("/api")
                    .route("/content", web::get().to(content))
                    .route("/newsletter", web::get().to(newsletter_settings))
                    .route("/newsletter", web::post().to(subscribe)),
            )
            .app_data(site_content.clone())
            .app_data(provider_client.clone())
    })
    .listen(listener)?
    .run())
}
