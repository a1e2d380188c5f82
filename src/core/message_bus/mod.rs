//=========================================================================
// Message Bus
//=========================================================================
//
// Typed notification outbox. See `message_bus.rs` for the flow.
//
//=========================================================================

//=== Module Declarations =================================================

mod message_bus;

//=== Public API ==========================================================

pub use message_bus::{Message, MessageBus};
