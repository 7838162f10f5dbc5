//! Deployment settings discovery for EPiServer web solutions
//!
//! Fills in a partially specified [`Context`] by probing a solution
//! directory: the solution name, the web project directory, the site URL,
//! the target .NET framework version and the installed CMS major version.
//!
//! # Pipeline
//!
//! ```text
//!   Root ──> project name ──> web project ──> project URL
//!                                  │
//!                                  ├────────> framework version
//!                                  └────────> platform version
//! ```
//!
//! [`Resolver`] runs the steps in that order. Each step returns a
//! `Result<_, ResolveError>`; the first failure stops the run, is recorded in
//! the context and leaves every later field unresolved. Steps that need the
//! web project take a [`WebProject`], which only the web project step can
//! produce.
//!
//! Nothing here writes files or touches the network; all disk access goes
//! through a [`deploy_fs::Probe`].
//!
//! # Example
//!
//! ```no_run
//! use deploy_resolve::{Context, Resolver};
//!
//! let mut context = Context::new("/src/Alloy").with_project_url("alloy.local");
//! Resolver::new().resolve(&mut context);
//! if let Some(failure) = context.failure() {
//!     eprintln!("{failure}");
//! }
//! ```

pub mod assembly;
pub mod config;
pub mod context;
pub mod documents;
pub mod error;
pub mod resolver;
pub mod steps;

pub use config::{ResolverConfig, Settings};
pub use context::{Context, Root};
pub use error::{Error, FailureKind, ResolveError, Result};
pub use resolver::Resolver;
pub use steps::WebProject;
