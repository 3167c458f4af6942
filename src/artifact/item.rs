use std::fmt;
use std::path::PathBuf;

/// One of the five downstream consumers of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetUnit {
    /// Shared contract interfaces and enum definitions
    Contracts,
    /// Data-access layer (entity sets, view sets, data context)
    DataLayer,
    /// Web API controllers and service registration
    WebApi,
    /// Desktop MVVM views and view models
    DesktopViews,
    /// Angular front end (models, service clients, components)
    WebFrontend,
}

impl TargetUnit {
    pub const ALL: [TargetUnit; 5] = [
        TargetUnit::Contracts,
        TargetUnit::DataLayer,
        TargetUnit::WebApi,
        TargetUnit::DesktopViews,
        TargetUnit::WebFrontend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetUnit::Contracts => "Contracts",
            TargetUnit::DataLayer => "DataLayer",
            TargetUnit::WebApi => "WebApi",
            TargetUnit::DesktopViews => "DesktopViews",
            TargetUnit::WebFrontend => "WebFrontend",
        }
    }
}

impl fmt::Display for TargetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of generated output within a target unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    // Contracts
    EntityContract,
    ViewContract,
    ModelContract,
    EnumDefinition,
    // Data layer
    EntitySet,
    ViewSet,
    DataContext,
    // Web API
    ApiController,
    ServiceRegistration,
    // Desktop views
    ViewModel,
    ListView,
    DetailView,
    // Web front end
    TsModel,
    ServiceClient,
    ListComponent,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::EntityContract => "EntityContract",
            ArtifactKind::ViewContract => "ViewContract",
            ArtifactKind::ModelContract => "ModelContract",
            ArtifactKind::EnumDefinition => "EnumDefinition",
            ArtifactKind::EntitySet => "EntitySet",
            ArtifactKind::ViewSet => "ViewSet",
            ArtifactKind::DataContext => "DataContext",
            ArtifactKind::ApiController => "ApiController",
            ArtifactKind::ServiceRegistration => "ServiceRegistration",
            ArtifactKind::ViewModel => "ViewModel",
            ArtifactKind::ListView => "ListView",
            ArtifactKind::DetailView => "DetailView",
            ArtifactKind::TsModel => "TsModel",
            ArtifactKind::ServiceClient => "ServiceClient",
            ArtifactKind::ListComponent => "ListComponent",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of file extensions the engine emits.
///
/// Comment syntax for header labels and region markers dispatches on this
/// enum, keeping the table exhaustive: adding an extension without a comment
/// style is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    CSharp,
    TypeScript,
    Html,
    Xaml,
}

impl FileExtension {
    pub fn as_str(self) -> &'static str {
        match self {
            FileExtension::CSharp => "cs",
            FileExtension::TypeScript => "ts",
            FileExtension::Html => "html",
            FileExtension::Xaml => "xaml",
        }
    }

    /// Reverse lookup used by the cleanup pass when scanning on-disk files.
    pub fn from_path(path: &std::path::Path) -> Option<FileExtension> {
        match path.extension().and_then(|e| e.to_str())? {
            "cs" => Some(FileExtension::CSharp),
            "ts" => Some(FileExtension::TypeScript),
            "html" => Some(FileExtension::Html),
            "xaml" => Some(FileExtension::Xaml),
            _ => None,
        }
    }

    pub fn comment_style(self) -> CommentStyle {
        match self {
            FileExtension::CSharp | FileExtension::TypeScript => CommentStyle::Line("//"),
            FileExtension::Html | FileExtension::Xaml => CommentStyle::Block("<!--", "-->"),
        }
    }
}

/// Comment syntax for a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Single-line prefix, e.g. `//`
    Line(&'static str),
    /// Paired delimiters, e.g. `<!--` `-->`
    Block(&'static str, &'static str),
}

impl CommentStyle {
    /// Wrap `text` as a one-line comment.
    pub fn wrap(self, text: &str) -> String {
        match self {
            CommentStyle::Line(prefix) => format!("{prefix} {text}"),
            CommentStyle::Block(open, close) => format!("{open} {text} {close}"),
        }
    }
}

/// Header label of a generated file.
///
/// The default label and a special label are mutually exclusive; both mark
/// the file as generator-owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLabel {
    Default,
    Special(String),
}

/// A single generated artifact: identity, destination, and ordered source
/// lines.
///
/// Identity `(unit, kind, full_name)` is unique per generation run.
/// `sub_path` is not unique: multiple items may share a destination when the
/// writer aggregates them into a group file. Items are consumed once by the
/// writer and never persisted as objects, only as emitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedItem {
    pub unit: TargetUnit,
    pub kind: ArtifactKind,
    /// Namespace-qualified artifact name, e.g. `Support.Data.OrderSet`
    pub full_name: String,
    pub extension: FileExtension,
    /// Destination path relative to the writer's target root
    pub sub_path: PathBuf,
    /// Ordered source lines, without the header label (the writer owns the
    /// header so group files carry exactly one)
    pub source: Vec<String>,
    pub label: ItemLabel,
}

impl GeneratedItem {
    /// Header-label line for this item's extension.
    pub fn header_line(&self) -> String {
        super::markers::header_line(self.extension, &self.label)
    }
}
