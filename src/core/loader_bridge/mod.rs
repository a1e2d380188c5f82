//=========================================================================
// Loader Bridge
//=========================================================================
//
// Bridges the asynchronous resource loader with the single-threaded
// scene ordering engine. Completion events cross over a crossbeam
// channel and are drained at tick boundaries.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;

//=== Internal API ========================================================

pub(crate) use event_collector::LoaderEventCollector;
pub use event_collector::TickControl;
