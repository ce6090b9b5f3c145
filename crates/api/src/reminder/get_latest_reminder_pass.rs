use crate::{
    error::SignflowError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use signflow_api_structs::get_latest_reminder_pass::*;
use signflow_domain::ReminderPass;
use signflow_infra::SignflowContext;

pub async fn get_latest_reminder_pass_controller(
    ctx: web::Data<SignflowContext>,
) -> Result<HttpResponse, SignflowError> {
    execute(GetLatestReminderPassUseCase, &ctx)
        .await
        .map(|pass| HttpResponse::Ok().json(APIResponse::new(pass)))
        .map_err(SignflowError::from)
}

#[derive(Debug)]
struct GetLatestReminderPassUseCase;

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for SignflowError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("No reminder pass has run yet.".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetLatestReminderPassUseCase {
    type Response = ReminderPass;

    type Error = UseCaseError;

    const NAME: &'static str = "GetLatestReminderPass";

    async fn execute(&mut self, ctx: &SignflowContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminder_passes
            .find_latest()
            .await
            .ok_or(UseCaseError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signflow_domain::ReminderPassSummary;

    #[actix_web::main]
    #[test]
    async fn it_returns_not_found_before_first_pass() {
        let ctx = SignflowContext::create_inmemory();
        let res = GetLatestReminderPassUseCase.execute(&ctx).await;
        assert_eq!(res.err(), Some(UseCaseError::NotFound));
    }

    #[actix_web::main]
    #[test]
    async fn it_returns_latest_pass() {
        let ctx = SignflowContext::create_inmemory();
        let pass = ReminderPass::new(
            10,
            20,
            ReminderPassSummary {
                reminders_sent: 4,
                ..Default::default()
            },
        );
        ctx.repos.reminder_passes.insert(&pass).await.unwrap();

        let res = GetLatestReminderPassUseCase.execute(&ctx).await.unwrap();
        assert_eq!(res, pass);
    }
}
