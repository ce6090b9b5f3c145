mod helpers;

use helpers::setup::spawn_app;
use signflow_api::{execute, RunReminderPassUseCase};
use signflow_api_structs::{get_latest_reminder_pass, get_service_health};
use signflow_domain::{
    Company, DocumentCollection, SendingMethod, Signer, SignerStatus, SigningMode, User,
};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let app = spawn_app().await;
    let res = reqwest::get(format!("{}/", app.address))
        .await
        .expect("Expected status request to succeed");
    assert!(res.status().is_success());
    let body = res
        .json::<get_service_health::APIResponse>()
        .await
        .expect("Expected health check body");
    assert!(!body.message.is_empty());
}

#[actix_web::main]
#[test]
async fn test_latest_reminder_pass_is_not_found_before_first_pass() {
    let app = spawn_app().await;
    let res = reqwest::get(format!("{}/reminders/passes/latest", app.address))
        .await
        .expect("Expected request to succeed");
    assert_eq!(res.status().as_u16(), 404);
}

#[actix_web::main]
#[test]
async fn test_reminder_pass_is_reported() {
    let app = spawn_app().await;
    let ctx = &app.ctx;

    let mut company = Company::new("Acme".into());
    company.reminder_policy.enabled = true;
    company.reminder_policy.frequency_days = 1;
    ctx.repos.companies.insert(&company).await.unwrap();
    let user = User::new(company.id.clone());
    ctx.repos.users.insert(&user).await.unwrap();

    let mut collection =
        DocumentCollection::new(company.id.clone(), user.id.clone(), SigningMode::OrderedGroupSign);
    for (i, status) in [SignerStatus::Signed, SignerStatus::Viewed, SignerStatus::Viewed]
        .iter()
        .enumerate()
    {
        let mut signer = Signer::new(format!("Signer {}", i), Some(SendingMethod::Email), i as i32);
        signer.email = Some(format!("signer{}@example.com", i));
        signer.status = *status;
        collection.signers.push(signer);
    }
    ctx.repos.document_collections.insert(&collection).await.unwrap();

    let pass = execute(RunReminderPassUseCase, ctx)
        .await
        .expect("Reminder pass to run");
    assert_eq!(pass.summary.reminders_sent, 1);

    let stored = ctx
        .repos
        .document_collections
        .find(&collection.id)
        .await
        .unwrap();
    assert!(stored.signers[0].time_last_sent.is_none());
    assert!(stored.signers[1].time_last_sent.is_some());
    assert!(stored.signers[2].time_last_sent.is_none());

    let res = reqwest::get(format!("{}/reminders/passes/latest", app.address))
        .await
        .expect("Expected request to succeed");
    assert!(res.status().is_success());
    let body = res
        .json::<get_latest_reminder_pass::APIResponse>()
        .await
        .expect("Expected reminder pass body");
    assert_eq!(body.reminder_pass.id, pass.id);
    assert_eq!(body.reminder_pass.summary.reminders_sent, 1);
    assert_eq!(body.reminder_pass.summary.companies_scanned, 1);
}
