//! Roast My Friends: a one-page web app that captions an uploaded photo with
//! a Mistral-generated roast in the style of your choice.

pub mod encode;
mod page;
pub mod prompts;
pub mod roast;
pub mod server;

pub use encode::{encode_image, EncodeError, EncodedImage};
pub use prompts::{prompt_for, RoastStyle, UnknownStyle, ALL_STYLES};
pub use roast::{InferenceError, MistralClient, MISTRAL_API_URL, ROAST_MODEL};
pub use server::{router, AppState, RoastResponse};
