//! AI компоненты: decision policy противника

// NOTE: AIState и AIConfig определены в crate::ai module (ai/simple_fsm.rs),
// здесь только re-export для единообразия
pub use crate::ai::{AIConfig, AIState};
