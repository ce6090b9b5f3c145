use signflow_api::Application;
use signflow_infra::SignflowContext;

pub struct TestApp {
    pub ctx: SignflowContext,
    pub address: String,
}

// Launch the application as a background task
pub async fn spawn_app() -> TestApp {
    let mut ctx = SignflowContext::create_inmemory();
    ctx.config.port = 0; // Random port
    // Passes are triggered explicitly by the tests
    ctx.config.reminders.job_enabled = false;

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp { ctx, address }
}
