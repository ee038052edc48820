use crate::{
    ApiDoc, Database,
    error::{
        Error, StartupError,
        error::InvalidBodySnafu,
        startup_error::{BindSnafu, RecordsSnafu},
    },
    routes::{self, index::StaticDir},
    settings::{Environment, Settings},
};
use actix_files::Files;
use actix_web::{
    HttpServer,
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
};
use csv_store::CsvAdapter;
use snafu::{IntoError, ResultExt};
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<Self, StartupError> {
        let address = settings.api.listener_address();
        let listener = TcpListener::bind(&address).context(BindSnafu {
            address: address.clone(),
        })?;
        let port = listener
            .local_addr()
            .context(BindSnafu {
                address: address.clone(),
            })?
            .port();

        let records = CsvAdapter::new(&settings.records).context(RecordsSnafu)?;

        let server = create_server(records, listener, settings).context(BindSnafu { address })?;

        info!(port, environment = %settings.environment, "golden records api started");

        Ok(App { server, port })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn create_server<T>(
    database: T,
    listener: TcpListener,
    settings: &Settings,
) -> Result<Server, std::io::Error>
where
    T: Database + Clone + Send + Sync + 'static,
{
    let environment = settings.environment;
    let not_prod = environment != Environment::Production;
    let static_dir = StaticDir(settings.api.static_dir.clone());

    let mut server = HttpServer::new(move || {
        let json_config = web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| {
                let err: Error = InvalidBodySnafu.into_error(err);
                err.into()
            });

        let app = actix_web::App::new()
            .app_data(Data::new(database.clone()))
            .app_data(Data::new(static_dir.clone()))
            .app_data(json_config)
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::index::index))
            .route("/search", web::get().to(routes::search::search::<T>))
            .route("/ask", web::post().to(routes::ask::ask::<T>))
            .service(Files::new("/static", &static_dir.0));

        match environment {
            Environment::Production => app,
            Environment::Local | Environment::Development | Environment::Test => {
                let swagger = SwaggerUi::new("/swagger-ui/{_:.*}").config(
                    utoipa_swagger_ui::Config::default()
                        .try_it_out_enabled(true)
                        .show_mutated_request(true),
                );

                app.service(swagger.url("/api-doc/openapi.json", ApiDoc::openapi()))
            }
        }
    })
    .listen(listener)?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
