use std::fmt::Debug;
use todo_reminders_infra::ReminderContext;
use tracing::warn;

pub trait UseCase: Debug {
    type Response;
    type Errors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors>;
}

#[tracing::instrument(name = "Executing usecase", skip(ctx))]
pub fn execute<U>(mut usecase: U, ctx: &ReminderContext) -> Result<U::Response, U::Errors>
where
    U: UseCase,
    U::Errors: Debug,
{
    let res = usecase.execute(ctx);

    if let Err(e) = &res {
        warn!("Use case error: {:?}", e);
    }

    res
}
