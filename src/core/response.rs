use crate::domain::model::{Card, Directive, OutputSpeech, Reprompt, Response};

fn ssml(text: &str) -> OutputSpeech {
    OutputSpeech::Ssml {
        ssml: format!("<speak>{}</speak>", text),
    }
}

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: &str) -> Self {
        self.response.output_speech = Some(ssml(text));
        self
    }

    /// Reprompt and keep the session open.
    pub fn ask(mut self, text: &str) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: ssml(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn card(mut self, card: Card) -> Self {
        self.response.card = Some(card);
        self
    }

    pub fn directive(mut self, directive: Directive) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
