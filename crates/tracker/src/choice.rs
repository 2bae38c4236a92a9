//! Lookup results reshaped into selectable choices.
//!
//! Each shaper turns a set of rows into `(label, value)` pairs: the label is
//! shown in a selection prompt, the value is what the handler binds into the
//! following statement.

use db::models::{DepartmentRow, EmployeeRow, RoleRow};

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Shape departments into (name, id) choices.
pub fn department_choices(rows: &[DepartmentRow]) -> Vec<Choice<i32>> {
    rows.iter()
        .map(|row| Choice::new(row.name.clone(), row.id))
        .collect()
}

/// Shape roles into (title, id) choices.
pub fn role_choices(rows: &[RoleRow]) -> Vec<Choice<i32>> {
    rows.iter()
        .map(|row| Choice::new(row.title.clone(), row.id))
        .collect()
}

/// Shape employees into ("first last", id) choices.
///
/// With `include_none`, a synthetic "None" entry carrying no id is prepended
/// so the selection can stand for "no manager" — even when the employee table
/// is empty.
pub fn employee_choices(rows: &[EmployeeRow], include_none: bool) -> Vec<Choice<Option<i32>>> {
    let mut choices: Vec<Choice<Option<i32>>> = Vec::with_capacity(rows.len() + 1);
    if include_none {
        choices.push(Choice::new("None", None));
    }
    choices.extend(rows.iter().map(|row| {
        Choice::new(
            format!("{} {}", row.first_name, row.last_name),
            Some(row.id),
        )
    }));
    choices
}

/// Borrow the labels of `choices` for a selection prompt.
pub fn labels<T>(choices: &[Choice<T>]) -> Vec<&str> {
    choices.iter().map(|choice| choice.label.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i32, first: &str, last: &str) -> EmployeeRow {
        EmployeeRow {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            role_id: 1,
            manager_id: None,
        }
    }

    #[test]
    fn department_choices_pair_name_with_id() {
        let rows = vec![
            DepartmentRow {
                id: 7,
                name: "Engineering".to_string(),
            },
            DepartmentRow {
                id: 9,
                name: "Sales".to_string(),
            },
        ];
        let choices = department_choices(&rows);
        assert_eq!(choices[0], Choice::new("Engineering", 7));
        assert_eq!(choices[1], Choice::new("Sales", 9));
    }

    #[test]
    fn employee_labels_join_names_with_one_space() {
        let choices = employee_choices(&[employee(3, "Ada", "Lovelace")], false);
        assert_eq!(choices[0].label, "Ada Lovelace");
        assert_eq!(choices[0].value, Some(3));
    }

    #[test]
    fn none_sentinel_is_always_first_even_without_employees() {
        let choices = employee_choices(&[], true);
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0], Choice::new("None", None));

        let choices = employee_choices(&[employee(1, "Ada", "Lovelace")], true);
        assert_eq!(choices[0], Choice::new("None", None));
        assert_eq!(choices[1].value, Some(1));
    }

    #[test]
    fn without_sentinel_every_entry_carries_an_id() {
        let rows = vec![employee(1, "Ada", "Lovelace"), employee(2, "Alan", "Turing")];
        let choices = employee_choices(&rows, false);
        assert_eq!(choices.len(), 2);
        assert!(choices.iter().all(|choice| choice.value.is_some()));
    }

    #[test]
    fn labels_borrow_in_order() {
        let rows = vec![employee(1, "Ada", "Lovelace")];
        let choices = employee_choices(&rows, true);
        assert_eq!(labels(&choices), vec!["None", "Ada Lovelace"]);
    }
}
