//! Platform detection and installer resolution.
//!
//! This module derives a visitor's (OS, architecture) signature, either
//! from a browser user-agent string or from the host the binary runs on,
//! and picks the best-fitting installer from a release's asset list.

mod detection;
mod resolver;

pub use detection::{Arch, Os, PlatformSignature};
pub use resolver::{DownloadResolver, SmartResolver};
