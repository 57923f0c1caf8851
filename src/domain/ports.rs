use crate::domain::model::{Intent, Request, RequestEnvelope, Response};
use crate::utils::error::Result;
use std::ops::RangeInclusive;

pub trait ConfigProvider: Send + Sync {
    fn skill_name(&self) -> &str;
    fn icon_url(&self) -> &str;
    fn track_base_url(&self) -> &str;
    fn tempo_range(&self) -> RangeInclusive<u32>;
    fn duration_range(&self) -> RangeInclusive<u64>;
    fn default_duration(&self) -> &str;
}

/// What a handler sees for one request.
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    pub config: &'a dyn ConfigProvider,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope, config: &'a dyn ConfigProvider) -> Self {
        Self { envelope, config }
    }

    pub fn request(&self) -> &'a Request {
        &self.envelope.request
    }

    pub fn intent(&self) -> Option<&'a Intent> {
        self.envelope.request.intent()
    }

    pub fn is_intent(&self, name: &str) -> bool {
        self.intent().is_some_and(|intent| intent.name == name)
    }

    pub fn slot_value(&self, name: &str) -> Option<&'a str> {
        self.intent().and_then(|intent| intent.slot_value(name))
    }
}

pub trait RequestHandler: Send + Sync {
    fn name(&self) -> &'static str;
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool;
    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response>;
}
