//! The fixed menu of session actions.

/// One entry in the main menu.
///
/// Dispatch happens on this enum rather than on label strings, so a missing
/// handler is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewEmployees,
    AddEmployee,
    UpdateEmployeeRole,
    ViewRoles,
    AddRole,
    ViewDepartments,
    AddDepartment,
    Quit,
}

impl MenuAction {
    /// Every action in menu order; `Quit` is always last.
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewEmployees,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::ViewRoles,
        MenuAction::AddRole,
        MenuAction::ViewDepartments,
        MenuAction::AddDepartment,
        MenuAction::Quit,
    ];

    /// The label shown for this action in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewEmployees => "View All Employees",
            MenuAction::AddEmployee => "Add Employee",
            MenuAction::UpdateEmployeeRole => "Update Employee Role",
            MenuAction::ViewRoles => "View All Roles",
            MenuAction::AddRole => "Add Role",
            MenuAction::ViewDepartments => "View All Departments",
            MenuAction::AddDepartment => "Add Department",
            MenuAction::Quit => "Quit",
        }
    }

    /// All menu labels, in menu order.
    pub fn labels() -> Vec<&'static str> {
        MenuAction::ALL.iter().map(|action| action.label()).collect()
    }
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_has_eight_actions_with_quit_last() {
        assert_eq!(MenuAction::ALL.len(), 8);
        assert_eq!(MenuAction::ALL[MenuAction::ALL.len() - 1], MenuAction::Quit);
    }

    #[test]
    fn labels_follow_menu_order() {
        assert_eq!(
            MenuAction::labels(),
            vec![
                "View All Employees",
                "Add Employee",
                "Update Employee Role",
                "View All Roles",
                "Add Role",
                "View All Departments",
                "Add Department",
                "Quit",
            ]
        );
    }
}
