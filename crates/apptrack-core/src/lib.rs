pub mod alert;
pub mod config;
pub mod contract;
pub mod copy;
pub mod deadline;
pub mod debounce;
pub mod quick_status;
pub mod status_gate;
pub mod theme;
pub mod ticket;

pub use apptrack_shared::{
  ApplicationStatus,
  QuickStatusRequest,
  QuickStatusResponse
};
