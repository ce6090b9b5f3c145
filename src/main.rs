mod telemetry;

use signflow_api::Application;
use signflow_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("signflow_server".into(), "info".into());
    init_subscriber(subscriber);

    run_migration()
        .await
        .expect("Database migrations to run successfully");
    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
