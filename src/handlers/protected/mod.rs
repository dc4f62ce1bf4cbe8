// handlers/protected/mod.rs - Admin handlers (authorization gate required)
//
// Every handler here takes an `AdminUser` extractor, so the caller's token
// is verified against the upstream auth endpoint before any body is read
// or any mutation is forwarded.

pub mod projects;
pub mod skills;
pub mod upload;

// Re-export handler functions for use in routing
pub use projects::create as project_create;
pub use projects::delete as project_delete;
pub use projects::update as project_update;
pub use skills::create as skill_create;
pub use skills::delete as skill_delete;
pub use upload::post as upload_post;
