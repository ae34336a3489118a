#![allow(dead_code)]

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use crate::{
    app::env::Envy,
    registrations::registrar::{Registrar, SimulatedRegistrar},
};

mod app;
mod registrations;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub registrar: Arc<dyn Registrar>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    let delay = Duration::from_millis(envy.processing_delay_ms());

    let state = AppState {
        envy: Arc::new(envy),
        registrar: Arc::new(SimulatedRegistrar::new(delay)),
    };

    // app
    let app = app::router::build(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%app_env, %addr, "listening");

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e, "server error");
    }
}
