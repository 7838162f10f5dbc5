use deploy_resolve::{Context, Resolver};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Route resolver logs to the test output; set `RUST_LOG=deploy_resolve=debug`
/// to see each step.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Resolve a fresh context rooted at `root` with the default resolver.
#[allow(dead_code)]
pub fn resolve_at(root: &Path) -> Context {
    init_tracing();
    let mut context = Context::new(root);
    Resolver::new().resolve(&mut context);
    context
}
