use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Evaluate the integrity rules against the project matrix.
    Check(CheckArgs),
    /// Classify data-governance violations in the table/endpoint/function graph.
    Violations(ViolationsArgs),
    /// Inject a use-case annotation into a source file.
    Annotate(AnnotateArgs),
    /// Print registered JSON Schemas.
    Schema(SchemaArgs),
    /// Serve newline-delimited JSON requests on stdin/stdout.
    Rpc,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Include passing findings in table output.
    #[arg(long)]
    pub show_passes: bool,

    /// Exit non-zero when there are warnings.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ViolationsArgs {
    /// Only show findings for this entity id.
    #[arg(long)]
    pub entity: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AnnotateArgs {
    /// Source file, relative to the project root.
    #[arg(long)]
    pub file: String,

    /// Element (tag or component) name, matched case-sensitively.
    #[arg(long)]
    pub element: String,

    /// Use case id, e.g. UC-001.
    #[arg(long = "use-case")]
    pub use_case: String,

    /// Function record within the use case.
    #[arg(long)]
    pub function: String,

    /// Compute the annotation without writing the file.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `document` or `annotation_payload`.
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// List registered schema names.
    #[arg(long, conflicts_with = "name")]
    pub list: bool,
}
