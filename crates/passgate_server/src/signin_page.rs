//! Sign-in page rendering.
//!
//! The form is embedded with `include_str!` and rendered by tera. Templates ending in
//! `.html` are autoescaped, so field labels and provider names are safe to interpolate.

use passgate_core::prelude::*;

use std::sync::LazyLock;
use tera::{Context, Tera};

const SIGNIN_TEMPLATE: &str = "signin.html";

static ENGINE: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(|| {
    let mut engine = Tera::default();
    engine.add_raw_templates(vec![(
        SIGNIN_TEMPLATE,
        include_str!("../templates/signin.html"),
    )])?;
    Ok(engine)
});

/// Renders the login form for a provider posting to `action`.
pub fn render<A: CredentialsAuthorizer>(
    provider: &CredentialsProvider<A>,
    action: &str,
) -> Result<String, AuthError> {
    let engine = ENGINE
        .as_ref()
        .map_err(|e| AuthError::System(format!("sign-in template: {e}")))?;

    let mut context = Context::new();
    context.insert("action", action);
    context.insert("name", provider.name());
    context.insert("fields", provider.fields());

    engine
        .render(SIGNIN_TEMPLATE, &context)
        .map_err(|e| AuthError::System(format!("sign-in template: {e}")))
}
