//! Session types shared between the portal service and any future gateway.
//!
//! Provides session-token (JWT) issue/validate and the session cookie builders.

pub mod cookie;
pub mod token;
