//! prefsform - Preferences Dialog
//!
//! This is the main entry point for the preferences dialog application.
//! It initializes logging and GTK/Libadwaita, then presents the dialog for
//! the global scope or for the context named on the command line.

use std::env::args;

use {
    anyhow::{Result, bail},
    libadwaita::glib::ExitCode,
    tracing_subscriber::EnvFilter,
};

use prefsform::{
    config::ScopeKey,
    error::{ErrorReporter, ResultExt, UiError},
    ui::PrefsApplication,
};

/// Main entry point for the prefsform application.
///
/// Usage: `prefsform [CONTEXT_ID]`
fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prefsform=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    run().inspect_err(|e| ErrorReporter::error(e, "main"))
}

/// Initializes GTK and runs the application until its window closes.
fn run() -> Result<()> {
    // Initialize GTK and Libadwaita
    libadwaita::gtk::init()
        .map_err(|e| UiError::InitializationError(e.to_string()))
        .add_context("Failed to initialize GTK")?;
    libadwaita::init()
        .map_err(|e| UiError::InitializationError(e.to_string()))
        .add_context("Failed to initialize Libadwaita")?;

    let scope = args().nth(1).map_or(ScopeKey::Global, ScopeKey::context);

    let app = PrefsApplication::new(scope).add_context("Failed to load options")?;
    if app.run() != ExitCode::SUCCESS {
        bail!("Application exited with an error");
    }

    Ok(())
}
