//! Diagram preferences page implementation.
//!
//! How objects, tables, routines and relationships are drawn in diagrams.

use std::rc::Rc;

use tracing::debug;

use crate::{state::PreferencesSession, ui::preferences::utils::OptionsPage};

/// Diagram preferences page.
pub struct DiagramPreferencesPage {
    /// Page with the figure options.
    pub page: OptionsPage,
}

impl DiagramPreferencesPage {
    /// Creates a new diagram preferences page instance.
    pub fn new(session: &Rc<PreferencesSession>) -> Self {
        let mut page = OptionsPage::new(session, "Diagram", "applications-graphics-symbolic");

        let objects = page.group("All Objects", None);
        objects.switch(
            "workbench.physical.ObjectFigure:Expanded",
            "Expand New Objects",
            Some("New objects are shown with all their sections expanded"),
        );
        objects.switch(
            "SynchronizeObjectColors",
            "Propagate Object Color Changes to All Diagrams",
            None,
        );

        let tables = page.group("Tables", None);
        tables.switch(
            "workbench.physical.TableFigure:ShowColumnTypes",
            "Show Column Types",
            None,
        );
        tables.switch(
            "workbench.physical.TableFigure:ShowSchemaName",
            "Show Schema Name",
            None,
        );
        tables.numeric_text(
            "workbench.physical.TableFigure:MaxColumnTypeLength",
            "Max. Length of Column Types",
        );
        tables.switch(
            "workbench.physical.TableFigure:ShowColumnFlags",
            "Show Column Flags",
            None,
        );
        tables.numeric_text(
            "workbench.physical.TableFigure:MaxColumnsDisplayed",
            "Max. Number of Columns to Display",
        );

        let routines = page.group("Routines", None);
        routines.numeric_text(
            "workbench.physical.RoutineGroupFigure:MaxRoutineNameLength",
            "Trim Routine Names Longer Than",
        );

        let relationships = page.group("Relationships/Connections", None);
        relationships.switch(
            "workbench.physical.Diagram:DrawLineCrossings",
            "Draw Line Crossings",
            None,
        );
        relationships.switch(
            "workbench.physical.Connection:HideCaptions",
            "Hide Captions",
            None,
        );
        relationships.switch(
            "workbench.physical.Connection:CenterCaptions",
            "Center Captions Over the Line",
            None,
        );

        debug!("DiagramPreferencesPage: Created");

        Self { page }
    }
}
