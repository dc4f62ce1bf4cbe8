// handlers/public/mod.rs - Public handlers (no authorization gate)
//
// Read-only portfolio data plus the contact form. Everything here forwards
// with the service credential and never consults the caller's identity.

pub mod contact;
pub mod projects;
pub mod skills;

// Re-export handler functions for use in routing
pub use contact::submit as contact_submit;
pub use projects::get as project_get;
pub use projects::list as project_list;
pub use skills::list as skill_list;
