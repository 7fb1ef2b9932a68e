//! Main application window.
//!
//! This module implements the `PrefsApplication`, a small host window that
//! presents the preferences dialog for the global scope or for one context
//! and reports lifecycle events.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use {
    libadwaita::{
        Application, ApplicationWindow, HeaderBar, StatusPage, Toast, ToastOverlay, ToolbarView,
        glib::{ExitCode, MainContext},
        gtk::{Align::Center, Button},
        prelude::{
            AdwApplicationWindowExt, AdwDialogExt, ApplicationExt, ApplicationExtManual,
            ButtonExt, Cast, GtkWindowExt,
        },
    },
    tracing::{debug, info},
};

use crate::{
    config::{OptionsStore, ScopeKey},
    error::PreferencesError,
    state::{PreferencesEvent, PreferencesNotifier, PreferencesSession},
    ui::preferences::PreferencesDialog,
};

/// Application identifier registered with the session bus.
pub const APPLICATION_ID: &str = "io.github.prefsform";

/// Main application class with window management.
pub struct PrefsApplication {
    /// The main application instance.
    pub app: Application,
    /// Options store shared by every preferences session.
    pub store: Arc<OptionsStore>,
    /// Lifecycle event fan-out shared by every preferences session.
    pub notifier: PreferencesNotifier,
    /// Scope the preferences dialog edits.
    pub scope: ScopeKey,
}

impl PrefsApplication {
    /// Creates a new application instance.
    ///
    /// # Arguments
    ///
    /// * `scope` - Global scope, or the context whose options are edited
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PrefsApplication` or an error.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Store` if the options file cannot be
    /// loaded.
    pub fn new(scope: ScopeKey) -> Result<Self, PreferencesError> {
        let store = OptionsStore::new()?;
        debug!("PrefsApplication: options file {:?}", store.config_path());

        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .build();

        Ok(Self {
            app,
            store: Arc::new(store),
            notifier: PreferencesNotifier::new(),
            scope,
        })
    }

    /// Runs the application.
    ///
    /// This method starts the GTK main loop, displays the host window and
    /// presents the preferences dialog.
    pub fn run(&self) -> ExitCode {
        self.app.connect_activate({
            let store = self.store.clone();
            let notifier = self.notifier.clone();
            let scope = self.scope.clone();

            move |app| build_ui(app, &store, &notifier, &scope)
        });

        // Command line arguments are handled by the caller.
        self.app.run_with_args::<&str>(&[])
    }
}

/// Builds the host window.
fn build_ui(
    app: &Application,
    store: &Arc<OptionsStore>,
    notifier: &PreferencesNotifier,
    scope: &ScopeKey,
) {
    let title = match scope.context_id() {
        Some(id) => format!("Options for {id}"),
        None => "Preferences".to_string(),
    };

    let window = ApplicationWindow::builder()
        .application(app)
        .title(title.as_str())
        .default_width(640)
        .default_height(480)
        .build();

    let open_button = Button::builder()
        .label("Open Preferences")
        .halign(Center)
        .css_classes(["pill", "suggested-action"])
        .build();

    let status = StatusPage::builder()
        .icon_name("preferences-system-symbolic")
        .title(title.as_str())
        .description("Changes are saved when the preferences dialog closes")
        .child(&open_button)
        .build();

    let toasts = ToastOverlay::new();
    toasts.set_child(Some(&status));
    let toolbar = ToolbarView::new();
    toolbar.add_top_bar(&HeaderBar::new());
    toolbar.set_content(Some(&toasts));
    window.set_content(Some(&toolbar));

    watch_events(notifier, &toasts);

    let current: Rc<RefCell<Option<Rc<PreferencesDialog>>>> = Rc::new(RefCell::new(None));
    let open = {
        let window = window.clone();
        let store = store.clone();
        let notifier = notifier.clone();
        let scope = scope.clone();

        move || {
            if current.borrow().is_some() {
                return;
            }

            let session = Rc::new(PreferencesSession::new(
                store.clone(),
                scope.clone(),
                notifier.clone(),
            ));
            let dialog = PreferencesDialog::new(session);

            let current_on_close = current.clone();
            dialog.widget.connect_closed(move |_| {
                current_on_close.borrow_mut().take();
            });

            dialog.present(Some(window.upcast_ref()));
            *current.borrow_mut() = Some(dialog);
        }
    };

    let open = Rc::new(open);
    open_button.connect_clicked({
        let open = open.clone();
        move |_| open()
    });

    window.present();
    open();
}

/// Logs lifecycle events and confirms saves with a toast.
fn watch_events(notifier: &PreferencesNotifier, toasts: &ToastOverlay) {
    let receiver = notifier.subscribe();
    let toasts = toasts.clone();

    MainContext::default().spawn_local(async move {
        while let Ok(event) = receiver.recv().await {
            info!("Preferences event: {:?}", event);
            if let PreferencesEvent::DidClose { saved: true, .. } = event {
                toasts.add_toast(Toast::new("Preferences saved"));
            }
        }
    });
}
