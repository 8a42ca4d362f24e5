// Hooks wrapping the stores for use from components. Reads go through
// the context signals directly; these handles own mutation + persist.

pub mod use_interactions;
pub mod use_session;
