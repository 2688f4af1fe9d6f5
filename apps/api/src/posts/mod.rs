// Post metadata: slug derivation/uniqueness, the draft/published state
// machine, and the persistence endpoints the admin editor talks to.

pub mod handlers;
pub mod lifecycle;
pub mod slug;
