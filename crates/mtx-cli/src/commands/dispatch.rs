use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => commands::check::handle(&args, ctx, flags),
        Commands::Violations(args) => commands::violations::handle(&args, ctx, flags),
        Commands::Annotate(args) => commands::annotate::handle(&args, ctx, flags),
        Commands::Rpc => commands::rpc::handle(ctx).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
