//! Active swap coordination

mod model;
mod service;

pub use model::{
    AcceptMatchRequest, ActiveSwap, SendMessageRequest, SwapEvent, SwapEventType, SwapMessage,
    SwapStatus, SwapVerificationResult, VerifyRequest,
};
pub use service::SwapCoordinator;
