use crate::core::handlers::default_handlers;
use crate::core::response::ResponseBuilder;
use crate::core::speech;
use crate::domain::model::{RequestEnvelope, Response, ResponseEnvelope};
use crate::domain::ports::{ConfigProvider, HandlerInput, RequestHandler};
use crate::utils::error::{Result, SkillError};

pub struct Skill<C: ConfigProvider> {
    config: C,
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl<C: ConfigProvider> Skill<C> {
    pub fn new(config: C) -> Self {
        Self::with_handlers(config, default_handlers())
    }

    pub fn with_handlers(config: C, handlers: Vec<Box<dyn RequestHandler>>) -> Self {
        Self { config, handlers }
    }

    /// Routes the request to the first handler that accepts it.
    pub fn dispatch(&self, envelope: &RequestEnvelope) -> Result<Response> {
        let input = HandlerInput::new(envelope, &self.config);

        let handler = self
            .handlers
            .iter()
            .find(|handler| handler.can_handle(&input))
            .ok_or_else(|| SkillError::NoHandlerError {
                request_type: envelope.request.request_type().to_string(),
            })?;

        tracing::debug!("Dispatching to {}", handler.name());
        handler.handle(&input)
    }

    /// Dispatches and turns any failure into the apology response.
    pub fn invoke(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        tracing::debug!(request = ?envelope.request, "Incoming request");
        if let Some(timestamp) = envelope.request.meta().and_then(|meta| meta.timestamp) {
            tracing::debug!("Request issued at {}", timestamp.to_rfc3339());
        }

        let response = match self.dispatch(envelope) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

                ResponseBuilder::new()
                    .speak(speech::EXCEPTION_MESSAGE)
                    .ask(speech::HELP_REPROMPT)
                    .build()
            }
        };

        tracing::debug!(response = ?response, "Outgoing response");
        ResponseEnvelope::new(response)
    }
}
