use koi_core::app_state::Route;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Screen a command belongs to. Navigation listings do not move.
const fn route_for(command: &Commands) -> Option<Route> {
    match command {
        Commands::Dashboard(_) | Commands::Sales { .. } => Some(Route::Dashboard),
        Commands::Shift { .. } => Some(Route::ShiftClose),
        Commands::Expense { .. } => Some(Route::ExpenseCapture),
        Commands::CashCount(_) => Some(Route::CashCount),
        Commands::Branches | Commands::Routes(_) => None,
    }
}

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(route) = route_for(&command) {
        ctx.state.navigate(route);
        tracing::debug!(route = %route, branch = ctx.state.active_branch_id(), "navigated");
    }

    match command {
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Sales { action } => commands::sales::handle(&action, ctx, flags).await,
        Commands::Shift { action } => commands::shift::handle(&action, ctx, flags).await,
        Commands::CashCount(args) => commands::cash_count::handle(&args, ctx, flags).await,
        Commands::Expense { action } => commands::expense::handle(&action, ctx, flags).await,
        Commands::Branches => commands::navigation::branches(ctx, flags),
        Commands::Routes(args) => commands::navigation::routes(&args, ctx, flags),
    }
}
