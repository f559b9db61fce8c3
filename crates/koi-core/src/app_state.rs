//! Process-wide navigation state: current route, active branch, sidebar.
//!
//! One [`AppState`] is created at startup and handed to every command
//! through the CLI context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ── Routes ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Dashboard,
    ShiftClose,
    ExpenseCapture,
    CashCount,
    Accounts,
}

impl Route {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::ShiftClose,
        Self::ExpenseCapture,
        Self::CashCount,
        Self::Accounts,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::ShiftClose => "/cierre-turno",
            Self::ExpenseCapture => "/gastos",
            Self::CashCount => "/arqueo",
            Self::Accounts => "/cuentas",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::ShiftClose => "Cierre de Turno",
            Self::ExpenseCapture => "Captura de Gastos",
            Self::CashCount => "Arqueo de Caja",
            Self::Accounts => "Cuentas por Pagar",
        }
    }

    /// Whether the route appears in the sidebar.
    #[must_use]
    pub const fn in_sidebar(self) -> bool {
        !matches!(self, Self::Accounts)
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| CoreError::UnknownVariant {
            kind: "route",
            value: s.to_string(),
        })
    }
}

// ── Branches and user ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
}

impl Branch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The three restaurant locations.
#[must_use]
pub fn default_branches() -> Vec<Branch> {
    vec![
        Branch::new("1", "Sucursal Centro"),
        Branch::new("2", "Sucursal Norte"),
        Branch::new("3", "Sucursal Sur"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "Admin Matriz".to_string(),
            role: "Administrador General".to_string(),
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

// ── State ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    user: User,
    branches: Vec<Branch>,
    active_branch: String,
    sidebar_open: bool,
    current_route: Route,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: User::default(),
            branches: default_branches(),
            active_branch: "1".to_string(),
            sidebar_open: false,
            current_route: Route::Dashboard,
        }
    }
}

impl AppState {
    /// Build the state with `active_branch` selected.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownBranch`] when the id is not in `branches`.
    pub fn new(user: User, branches: Vec<Branch>, active_branch: &str) -> Result<Self, CoreError> {
        let mut state = Self {
            user,
            branches,
            active_branch: String::new(),
            sidebar_open: false,
            current_route: Route::Dashboard,
        };
        state.set_active_branch(active_branch)?;
        Ok(state)
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    #[must_use]
    pub fn active_branch_id(&self) -> &str {
        &self.active_branch
    }

    #[must_use]
    pub fn active_branch(&self) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|branch| branch.id == self.active_branch)
    }

    /// Select a branch by id.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownBranch`] when no branch has that id. The current
    /// selection is kept.
    pub fn set_active_branch(&mut self, id: &str) -> Result<&Branch, CoreError> {
        let id = id.trim();
        let branch = self
            .branches
            .iter()
            .find(|branch| branch.id == id)
            .ok_or_else(|| CoreError::UnknownBranch(id.to_string()))?;
        self.active_branch = branch.id.clone();
        Ok(branch)
    }

    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub const fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    #[must_use]
    pub const fn current_route(&self) -> Route {
        self.current_route
    }

    /// Switch route. Closes the sidebar, as selecting an entry does on mobile.
    pub const fn navigate(&mut self, route: Route) {
        self.current_route = route;
        self.sidebar_open = false;
    }

    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        Route::ALL
            .into_iter()
            .filter(|route| route.in_sidebar())
            .map(|route| NavItem {
                path: route.path(),
                label: route.label(),
                active: route == self.current_route,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_matches_startup_values() {
        let state = AppState::default();
        assert_eq!(state.user().name, "Admin Matriz");
        assert_eq!(state.active_branch().unwrap().name, "Sucursal Centro");
        assert_eq!(state.current_route(), Route::Dashboard);
        assert!(!state.sidebar_open());
    }

    #[test]
    fn unknown_branch_keeps_selection() {
        let mut state = AppState::default();
        assert_eq!(state.set_active_branch("2").unwrap().name, "Sucursal Norte");
        assert_eq!(
            state.set_active_branch("9"),
            Err(CoreError::UnknownBranch("9".into()))
        );
        assert_eq!(state.active_branch_id(), "2");
    }

    #[test]
    fn new_rejects_missing_branch() {
        let result = AppState::new(User::default(), vec![Branch::new("7", "Playa")], "1");
        assert!(matches!(result, Err(CoreError::UnknownBranch(_))));
    }

    #[test]
    fn navigate_closes_sidebar() {
        let mut state = AppState::default();
        assert!(state.toggle_sidebar());
        state.navigate(Route::CashCount);
        assert!(!state.sidebar_open());

        let active: Vec<_> = state
            .nav_items()
            .into_iter()
            .filter(|item| item.active)
            .map(|item| item.path)
            .collect();
        assert_eq!(active, vec!["/arqueo"]);
    }

    #[test]
    fn sidebar_lists_four_routes() {
        let paths: Vec<_> = AppState::default()
            .nav_items()
            .into_iter()
            .map(|item| item.path)
            .collect();
        assert_eq!(paths, vec!["/", "/cierre-turno", "/gastos", "/arqueo"]);
    }

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!("/gastos/".parse::<Route>(), Ok(Route::ExpenseCapture));
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/cuentas"), Some(Route::Accounts));
        assert!("/nope".parse::<Route>().is_err());
    }
}
