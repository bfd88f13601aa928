#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod view;

#[cfg(feature = "server")]
pub use server::{load_records, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{App, HttpServer, middleware, web};
    use tera::Tera;

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::errors::RepositoryResult;
    use crate::repository::{DieselRepository, InMemoryRepository, JsonFileRepository};
    use crate::routes::api::{api_advocates, api_seed, query_config};
    use crate::routes::main::show_index;

    /// Reads the configured record source once into memory.
    ///
    /// `database_url` takes precedence over `dataset_path`.
    pub fn load_records(server_config: &ServerConfig) -> RepositoryResult<InMemoryRepository> {
        match &server_config.database_url {
            Some(database_url) => {
                log::info!("Loading advocates from database {database_url}");
                let pool = establish_connection_pool(database_url)?;
                InMemoryRepository::load(&DieselRepository::new(pool))
            }
            None => {
                let source = JsonFileRepository::new(&server_config.dataset_path);
                log::info!("Loading advocates from {}", source.path().display());
                InMemoryRepository::load(&source)
            }
        }
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig, repo: InMemoryRepository) -> std::io::Result<()> {
        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let assets_dir = server_config.assets_dir.clone();

        log::info!(
            "Serving {} advocates on {}:{}",
            repo.len(),
            bind_address.0,
            bind_address.1
        );

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", assets_dir.clone()))
                .service(
                    web::scope("/api")
                        .wrap(Cors::permissive())
                        .app_data(query_config())
                        .service(api_advocates)
                        .service(api_seed),
                )
                .service(show_index)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
