use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use mini_metronome::domain::model::{RequestEnvelope, ResponseEnvelope};
use mini_metronome::utils::{logger, validation::Validate};
use mini_metronome::{Skill, SkillSettings};
use std::sync::Arc;

async fn function_handler(
    skill: &Skill<SkillSettings>,
    event: LambdaEvent<RequestEnvelope>,
) -> Result<ResponseEnvelope, Error> {
    let (envelope, context) = event.into_parts();
    tracing::info!(
        request_id = %context.request_id,
        request_type = envelope.request.request_type(),
        "Handling skill request"
    );

    Ok(skill.invoke(&envelope))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 建立 Lambda 配置
    let settings = SkillSettings::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(Box::new(e));
    }
    tracing::info!("✅ Lambda configuration loaded for {}", settings.skill_name);

    let skill = Arc::new(Skill::new(settings));
    run(service_fn(move |event: LambdaEvent<RequestEnvelope>| {
        let skill = Arc::clone(&skill);
        async move { function_handler(&skill, event).await }
    }))
    .await
}
