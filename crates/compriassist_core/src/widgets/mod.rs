//! One controller per page widget. Each owns its state and exposes
//! handlers that return the effects the runtime must perform.
pub mod chat;
pub mod contact;
pub mod generative;
pub mod navigation;
pub mod scroll;
pub mod sentiment;
pub mod tabs;
pub mod visual;
