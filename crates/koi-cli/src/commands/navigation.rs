use anyhow::anyhow;
use koi_core::app_state::Route;
use serde::Serialize;

use crate::cli::root_commands::RoutesArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, print_rows};

#[derive(Debug, Serialize)]
struct BranchRow {
    id: String,
    name: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct RouteRow {
    path: &'static str,
    label: &'static str,
    sidebar: bool,
    active: bool,
}

const fn marker(active: bool) -> &'static str {
    if active { "*" } else { "" }
}

/// Handle `koi branches`.
pub fn branches(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let active = ctx.state.active_branch_id();
    let rows = ctx
        .state
        .branches()
        .iter()
        .map(|branch| BranchRow {
            id: branch.id.clone(),
            name: branch.name.clone(),
            active: branch.id == active,
        })
        .collect::<Vec<_>>();

    if flags.format != OutputFormat::Table {
        return output(&rows, flags.format);
    }
    let table = rows
        .iter()
        .map(|row| vec![marker(row.active).to_string(), row.id.clone(), row.name.clone()])
        .collect::<Vec<_>>();
    print_rows(&["", "id", "name"], &table);
    Ok(())
}

fn route_rows(current: Route) -> Vec<RouteRow> {
    Route::ALL
        .iter()
        .map(|route| RouteRow {
            path: route.path(),
            label: route.label(),
            sidebar: route.in_sidebar(),
            active: *route == current,
        })
        .collect()
}

/// Handle `koi routes [PATH]`.
///
/// With a path, navigates there first so the listing marks it active.
pub fn routes(args: &RoutesArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(path) = args.path.as_deref() {
        let route = Route::from_path(path).ok_or_else(|| anyhow!("no screen at '{path}'"))?;
        ctx.state.navigate(route);
    }

    let rows = route_rows(ctx.state.current_route());
    if flags.format != OutputFormat::Table {
        return output(&rows, flags.format);
    }
    let table = rows
        .iter()
        .map(|row| {
            vec![
                marker(row.active).to_string(),
                row.path.to_string(),
                row.label.to_string(),
                if row.sidebar { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    print_rows(&["", "path", "screen", "sidebar"], &table);
    Ok(())
}
