//! SQL editor preferences page implementation.
//!
//! Only shown for the global scope. Covers the schema sidebar, connection
//! timeouts, code completion, query execution and result set options.

use std::rc::Rc;

use {
    libadwaita::{SwitchRow, prelude::WidgetExt},
    tracing::debug,
};

use crate::{state::PreferencesSession, ui::preferences::utils::OptionsPage};

/// SQL editor preferences page.
pub struct SqlEditorPreferencesPage {
    /// Page with the SQL editor option groups.
    pub page: OptionsPage,
}

impl SqlEditorPreferencesPage {
    /// Creates a new SQL editor preferences page instance.
    pub fn new(session: &Rc<PreferencesSession>) -> Self {
        let page = OptionsPage::new(session, "SQL Editor", "text-editor-symbolic");

        let mut editor = Self { page };
        editor.setup_sidebar_options();
        editor.setup_session_options();
        editor.setup_code_completion_options();
        editor.setup_query_options();
        editor.setup_results_options();

        debug!("SqlEditorPreferencesPage: Created");

        editor
    }

    fn setup_sidebar_options(&mut self) {
        let group = self.page.group("Sidebar", None);

        group.switch(
            "DbSqlEditor:ShowSchemaTreeSchemaContents",
            "Show Schema Contents in Schema Tree",
            Some("Disable to speed up browsing servers with many schema objects"),
        );
        group.switch(
            "DbSqlEditor:ShowMetadataSchemata",
            "Show Metadata Schemata",
            None,
        );
        group.switch(
            "DbSqlEditor:SidebarModeCombined",
            "Combine Management and Schema Tree",
            None,
        );
    }

    fn setup_session_options(&mut self) {
        let group = self.page.group("MySQL Session", None);

        group.numeric_text(
            "DbSqlEditor:KeepAliveInterval",
            "DBMS Connection Keep-Alive Interval (seconds)",
        );
        group.numeric_text(
            "DbSqlEditor:ReadTimeOut",
            "DBMS Connection Read Timeout (seconds)",
        );
    }

    fn setup_code_completion_options(&mut self) {
        let group = self.page.group("Code Completion", None);

        let enabled = group.switch(
            "DbSqlEditor:CodeCompletionEnabled",
            "Enable Code Completion in Editors",
            None,
        );
        let auto_start = group.switch(
            "DbSqlEditor:AutoStartCodeCompletion",
            "Automatically Start Code Completion",
            None,
        );
        let upper_case = group.switch(
            "DbSqlEditor:CodeCompletionUpperCaseKeywords",
            "Use UPPERCASE Keywords on Completion",
            None,
        );

        let dependents: [SwitchRow; 2] = [auto_start, upper_case];
        let sync = move |row: &SwitchRow| {
            for dependent in &dependents {
                dependent.set_sensitive(row.is_active());
            }
        };
        sync(&enabled);
        enabled.connect_active_notify(sync);
    }

    fn setup_query_options(&mut self) {
        let group = self.page.group("SQL Processing", None);

        group.switch(
            "DbSqlEditor:ReformatViewDDL",
            "Reformat DDL for Views",
            None,
        );
        group.numeric_text(
            "SqlEditor::SyntaxCheck::MaxErrCount",
            "Max Syntax Errors",
        );
        group.entry("SqlMode", "Default SQL_MODE for Syntax Checker");
        group.switch(
            "SqlIdentifiersCS",
            "Case Sensitive Identifiers",
            Some("Compare identifiers case sensitively when looking up objects"),
        );
        group.entry("SqlDelimiter", "Non-Standard SQL Delimiter");
        group.selector(
            "DbSqlEditor:SQLCommentTypeForHotkey",
            "Comment Type for Hotkey",
            "--:--,#:#",
            false,
        );
        group.numeric_text(
            "DbSqlEditor:MaxQuerySizeToHistory",
            "Max Query Length to Store in History (bytes)",
        );
        group.switch(
            "DbSqlEditor:ContinueOnError",
            "Continue on SQL Script Error",
            None,
        );
        group.switch(
            "DbSqlEditor:SafeUpdates",
            "Safe Updates",
            Some("Reject UPDATEs and DELETEs with no key in the WHERE clause"),
        );
        group.switch(
            "DbSqlEditor:AutocommitMode",
            "New Connections Use Auto Commit Mode",
            None,
        );
        group.numeric_text(
            "DbSqlEditor:ProgressStatusUpdateInterval",
            "Progress Status Update Interval (ms)",
        );
        group.selector(
            "DbSqlEditor:OnlineDDLAlgorithm",
            "Default Algorithm for ALTER TABLE",
            "Default:DEFAULT,In place:INPLACE,Copy:COPY",
            false,
        );
        group.selector(
            "DbSqlEditor:OnlineDDLLock",
            "Default Lock for ALTER TABLE",
            "Default:DEFAULT,None:NONE,Shared:SHARED,Exclusive:EXCLUSIVE",
            false,
        );
    }

    fn setup_results_options(&mut self) {
        let group = self.page.group("Query Results", None);

        let limit_rows = group.switch("SqlEditor:LimitRows", "Limit Rows", None);
        let limit_count = group.numeric_text("SqlEditor:LimitRowsCount", "Limit Rows Count");
        limit_count.set_sensitive(limit_rows.is_active());
        limit_rows.connect_active_notify(move |row| limit_count.set_sensitive(row.is_active()));

        group.numeric_text(
            "Recordset:FieldValueTruncationThreshold",
            "Max Field Value Length to Display (bytes)",
        );
        group.switch(
            "DbSqlEditor:MySQL:TreatBinaryAsText",
            "Treat BINARY/VARBINARY as Non-Binary Character String",
            None,
        );
        group.switch(
            "DbSqlEditor:IsDataChangesCommitWizardEnabled",
            "Confirm Data Changes",
            None,
        );
        group.switch(
            "DbSqlEditor:IsLiveObjectAlterationWizardEnabled",
            "Review SQL Before Applying Object Changes",
            None,
        );
    }
}
