#![deny(warnings)]
#![deny(rust_2018_idioms)]

use web_api::{settings::Settings, startup::App};

#[tokio::main]
async fn main() {
    let settings = Settings::new().unwrap();
    settings.init_tracer();

    let app = App::build(&settings).await.unwrap();

    app.run().await.unwrap();
}
