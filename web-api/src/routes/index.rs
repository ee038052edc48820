use actix_files::NamedFile;
use actix_web::web;
use std::path::PathBuf;

/// Directory the front page and `/static` files are served from.
#[derive(Debug, Clone)]
pub struct StaticDir(pub PathBuf);

#[tracing::instrument(skip(dir))]
pub async fn index(dir: web::Data<StaticDir>) -> std::io::Result<NamedFile> {
    NamedFile::open_async(dir.0.join("index.html")).await
}
