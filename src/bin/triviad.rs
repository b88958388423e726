use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use diesel::r2d2::ConnectionManager;
use std::net::SocketAddr;
use structopt::StructOpt;
use trivia::api;

fn cors() -> actix_cors::CorsFactory {
    Cors::new()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .finish()
}

#[derive(StructOpt)]
struct Args {
    #[structopt(short, long, default_value = "0.0.0.0:5000")]
    bind: SocketAddr,
}

#[actix_rt::main]
async fn main() -> Result<(), exitfailure::ExitFailure> {
    env_logger::init();
    let _ = dotenv::dotenv();
    let args = Args::from_args();

    let db = std::env::var("DATABASE_URL")?;
    let cm = ConnectionManager::new(&db);
    let pool = api::DbPool::builder().build(cm)?;

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .app_data(api::json_config())
            .app_data(api::query_config())
            .configure(api::config)
            .default_service(web::route().to(api::method_not_allowed))
            .wrap(cors())
            .wrap(middleware::Logger::default())
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
