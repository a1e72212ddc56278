//! # hostline-core
//!
//! Shared logic for the Hostline receptionist site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Suspension Boundary                      │
//! │   fallback (spinner) ──────────────▶ rendered module         │
//! │                 ▲                                            │
//! │  ┌──────────────┴──────────┐   ┌──────────────────────────┐  │
//! │  │      ModuleHandle       │◀──│       Retry Loader       │  │
//! │  │ (memoized, Arc outcome) │   │ factory + delay + config │  │
//! │  └─────────────────────────┘   └──────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loader only depends on a deferred factory and a [`Delay`], so the same
//! code runs under tokio on the server and on browser timers in the frontend.

pub mod api;
pub mod config;
pub mod content;
pub mod delay;
pub mod error;
pub mod loader;
pub mod receptionist;
pub mod suspense;

pub use config::LoaderConfig;
pub use content::{PageContent, PageMeta, Section};
pub use delay::Delay;
#[cfg(feature = "tokio")]
pub use delay::TokioDelay;
pub use error::{Result, SiteError};
pub use loader::{
    join_all, lazy_with_retry, load_with_retry, ModuleHandle, ModuleStatus, Outcome, RetryLoader,
};
pub use receptionist::{BusinessProfile, DemoReceptionist, Intent};
pub use suspense::{DefaultFallback, Frame, SuspenseBoundary};
