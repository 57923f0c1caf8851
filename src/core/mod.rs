pub mod duration;
pub mod handlers;
pub mod metronome;
pub mod playback;
pub mod response;
pub mod skill;
pub mod speech;

pub use crate::domain::model::{RequestEnvelope, Response, ResponseEnvelope};
pub use crate::domain::ports::{ConfigProvider, HandlerInput, RequestHandler};
pub use crate::utils::error::Result;
