//! Built-in option defaults seeded into the global scope.
//!
//! Keys of the form `@<option>/Items` hold the choice list of a selector
//! whose choices are not spelled out by the page that builds it.

use crate::config::{fonts::default_font_set, value::OptionValue};

/// Compile-time default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Int(i64),
    Str(&'static str),
}

impl DefaultValue {
    #[must_use]
    pub fn to_value(self) -> OptionValue {
        match self {
            Self::Int(value) => OptionValue::Int(value),
            Self::Str(value) => OptionValue::from(value),
        }
    }
}

use DefaultValue::{Int, Str};

static DEFAULT_OPTIONS: &[(&str, DefaultValue)] = &[
    // General
    ("workbench.AutoReopenLastModel", Int(0)),
    ("workbench:ForceSWRendering", Int(0)),
    ("workbench:UndoEntries", Int(250)),
    ("workbench:AutoSaveModelInterval", Int(10)),
    ("workbench:AutoSaveScriptsInterval", Int(10)),
    ("workbench:SaveSQLWorkspaceOnClose", Int(1)),
    ("DbSqlEditor:DiscardUnsavedQueryTabs", Int(0)),
    ("grtshell:ShellLanguage", Str("Python")),
    ("@grtshell:ShellLanguage/Items", Str("Python")),
    ("workbench:InternalSchema", Str(".mysqlworkbench")),
    // Administration
    ("mysqldump", Str("")),
    ("mysqlclient", Str("")),
    ("dumpdirectory", Str("")),
    // SQL editor
    ("DbSqlEditor:ShowSchemaTreeSchemaContents", Int(1)),
    ("DbSqlEditor:ShowMetadataSchemata", Int(0)),
    ("DbSqlEditor:SidebarModeCombined", Int(0)),
    ("DbSqlEditor:KeepAliveInterval", Int(600)),
    ("DbSqlEditor:ReadTimeOut", Int(600)),
    ("DbSqlEditor:CodeCompletionEnabled", Int(1)),
    ("DbSqlEditor:AutoStartCodeCompletion", Int(1)),
    ("DbSqlEditor:CodeCompletionUpperCaseKeywords", Int(0)),
    ("DbSqlEditor:ReformatViewDDL", Int(0)),
    ("SqlEditor::SyntaxCheck::MaxErrCount", Int(100)),
    ("SqlMode", Str("")),
    ("SqlIdentifiersCS", Int(1)),
    ("SqlDelimiter", Str("$$")),
    ("DbSqlEditor:SQLCommentTypeForHotkey", Str("--")),
    ("DbSqlEditor:MaxQuerySizeToHistory", Int(65536)),
    ("DbSqlEditor:ContinueOnError", Int(0)),
    ("DbSqlEditor:SafeUpdates", Int(1)),
    ("DbSqlEditor:AutocommitMode", Int(1)),
    ("DbSqlEditor:ProgressStatusUpdateInterval", Int(500)),
    ("DbSqlEditor:OnlineDDLAlgorithm", Str("DEFAULT")),
    ("DbSqlEditor:OnlineDDLLock", Str("DEFAULT")),
    ("SqlEditor:LimitRows", Int(1)),
    ("SqlEditor:LimitRowsCount", Int(1000)),
    ("Recordset:FieldValueTruncationThreshold", Int(256)),
    ("DbSqlEditor:MySQL:TreatBinaryAsText", Int(0)),
    ("DbSqlEditor:IsDataChangesCommitWizardEnabled", Int(1)),
    ("DbSqlEditor:IsLiveObjectAlterationWizardEnabled", Int(1)),
    // Model
    ("PkColumnNameTemplate", Str("id%table%")),
    ("DefaultPkColumnType", Str("INT")),
    ("ColumnNameTemplate", Str("%table%col")),
    ("DefaultColumnType", Str("VARCHAR(45)")),
    ("FKNameTemplate", Str("fk_%stable%_%dtable%")),
    ("FKColumnNameTemplate", Str("%table%_%column%")),
    ("db.ForeignKey:updateRule", Str("NO ACTION")),
    ("@db.ForeignKey:updateRule/Items", Str("NO ACTION,CASCADE,SET NULL,RESTRICT")),
    ("db.ForeignKey:deleteRule", Str("NO ACTION")),
    ("@db.ForeignKey:deleteRule/Items", Str("NO ACTION,CASCADE,SET NULL,RESTRICT")),
    ("AuxTableTemplate", Str("%stable%_has_%dtable%")),
    // MySQL
    ("DefaultTargetMySQLVersion", Str("5.6")),
    ("@DefaultTargetMySQLVersion/Items", Str("5.1,5.5,5.6,5.7")),
    ("db.mysql.Table:tableEngine", Str("InnoDB")),
    ("@db.mysql.Table:tableEngine/Items", Str("InnoDB,MyISAM,MEMORY,ARCHIVE,CSV")),
    ("SqlGenerator.Mysql:SQL_MODE", Str("TRADITIONAL")),
    // Diagram
    ("workbench.physical.ObjectFigure:Expanded", Int(1)),
    ("SynchronizeObjectColors", Int(1)),
    ("workbench.physical.TableFigure:ShowColumnTypes", Int(1)),
    ("workbench.physical.TableFigure:ShowSchemaName", Int(0)),
    ("workbench.physical.TableFigure:MaxColumnTypeLength", Int(20)),
    ("workbench.physical.TableFigure:ShowColumnFlags", Int(0)),
    ("workbench.physical.TableFigure:MaxColumnsDisplayed", Int(30)),
    ("workbench.physical.RoutineGroupFigure:MaxRoutineNameLength", Int(20)),
    ("workbench.physical.Diagram:DrawLineCrossings", Int(0)),
    ("workbench.physical.Connection:HideCaptions", Int(0)),
    ("workbench.physical.Connection:CenterCaptions", Int(0)),
    // Appearance
    (
        "workbench.model.ObjectFigure:ColorList",
        Str("#98BFDA\n#FEDE58\n#98D8A5\n#FE9898\n#FE98FE\n#FFFFFF"),
    ),
    (
        "workbench.model.Figure:ColorList",
        Str("#FEFDED\n#EAFFE5\n#ECFDFF\n#F0F1FE\n#FFEBFA"),
    ),
];

/// Every built-in default, figure fonts included.
pub fn default_options() -> impl Iterator<Item = (&'static str, OptionValue)> {
    let fonts = default_font_set()
        .assignments()
        .into_iter()
        .map(|(key, face)| (key, OptionValue::from(face)));

    DEFAULT_OPTIONS
        .iter()
        .map(|(key, value)| (*key, value.to_value()))
        .chain(fonts)
}

/// Key under which the choice list of `option` is stored.
#[must_use]
pub fn items_key(option: &str) -> String {
    format!("@{option}/Items")
}
