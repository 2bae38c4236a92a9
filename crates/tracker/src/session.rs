//! The interactive session — menu loop and handlers.
//!
//! `Session` is the orchestrator:
//! 1. Presents the fixed action menu and dispatches on [`MenuAction`].
//! 2. Runs one handler at a time; each handler prompts, then issues a single
//!    parameterized statement through the `db` repositories.
//! 3. Applies one error policy for every handler: statement-level failures
//!    are reported and the menu resumes; transport-level failures end the
//!    session.

use tracing::{debug, error, info};

use db::{repository, DbPool};

use crate::action::MenuAction;
use crate::choice::{self, labels};
use crate::prompt::Prompt;
use crate::table::Table;
use crate::TrackerError;

/// Orchestrator for a single interactive session.
///
/// Holds the connection handle for the lifetime of the loop; the caller owns
/// the pool and releases it after [`Session::run`] returns.
pub struct Session<P> {
    pool: DbPool,
    prompt: P,
}

impl<P: Prompt> Session<P> {
    pub fn new(pool: DbPool, prompt: P) -> Self {
        Self { pool, prompt }
    }

    /// Run the menu loop until the user quits or the connection fails.
    ///
    /// # Errors
    /// Returns `TrackerError` only for unrecoverable failures: terminal I/O
    /// problems or transport-level database errors.  Statement-level database
    /// failures are printed and the loop continues.
    pub async fn run(&mut self) -> Result<(), TrackerError> {
        loop {
            let index = self
                .prompt
                .select("What would you like to do?", &MenuAction::labels())?;
            let action = MenuAction::ALL[index];
            debug!(%action, "dispatching menu action");

            if action == MenuAction::Quit {
                info!("Session ended by user");
                return Ok(());
            }

            if let Err(err) = self.dispatch(action).await {
                if err.is_recoverable() {
                    error!("handler failed: {err}");
                    println!("Error: {err}");
                } else {
                    return Err(err);
                }
            }
        }
    }

    async fn dispatch(&mut self, action: MenuAction) -> Result<(), TrackerError> {
        match action {
            MenuAction::ViewEmployees => self.display_employees().await,
            MenuAction::AddEmployee => self.add_employee().await,
            MenuAction::UpdateEmployeeRole => self.update_employee_role().await,
            MenuAction::ViewRoles => self.display_roles().await,
            MenuAction::AddRole => self.add_role().await,
            MenuAction::ViewDepartments => self.display_departments().await,
            MenuAction::AddDepartment => self.add_department().await,
            // Quit is handled in `run` and never reaches the dispatcher.
            MenuAction::Quit => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Mutation handlers
    // ------------------------------------------------------------------

    async fn add_department(&mut self) -> Result<(), TrackerError> {
        let name = self.prompt.input("What is the name of the department?")?;
        let row = repository::departments::insert_department(&self.pool, &name).await?;
        println!("Added {} to the database", row.name);
        Ok(())
    }

    async fn add_role(&mut self) -> Result<(), TrackerError> {
        let departments = repository::departments::list_departments(&self.pool).await?;
        if departments.is_empty() {
            println!("There are no departments to assign the role to. Add a department first.");
            return Ok(());
        }
        let department_choices = choice::department_choices(&departments);

        let title = self.prompt.input("What is the name of the role?")?;
        let salary = self.prompt.number("What is the salary of the role?")?;
        let index = self.prompt.select(
            "Which department does the role belong to?",
            &labels(&department_choices),
        )?;
        let department_id = department_choices[index].value;

        let row = repository::roles::insert_role(&self.pool, &title, salary, department_id).await?;
        println!("Added {} to the database", row.title);
        Ok(())
    }

    async fn add_employee(&mut self) -> Result<(), TrackerError> {
        let roles = repository::roles::list_roles(&self.pool).await?;
        if roles.is_empty() {
            println!("There are no roles to assign the employee to. Add a role first.");
            return Ok(());
        }
        let role_choices = choice::role_choices(&roles);

        let employees = repository::employees::list_employees(&self.pool).await?;
        let manager_choices = choice::employee_choices(&employees, true);

        let first_name = self.prompt.input("What is the employee's first name?")?;
        let last_name = self.prompt.input("What is the employee's last name?")?;
        let index = self
            .prompt
            .select("What is the employee's role?", &labels(&role_choices))?;
        let role_id = role_choices[index].value;
        let index = self
            .prompt
            .select("Who is the employee's manager?", &labels(&manager_choices))?;
        let manager_id = manager_choices[index].value;

        let row = repository::employees::insert_employee(
            &self.pool,
            &first_name,
            &last_name,
            role_id,
            manager_id,
        )
        .await?;
        println!("Added {} {} to the database", row.first_name, row.last_name);
        Ok(())
    }

    async fn update_employee_role(&mut self) -> Result<(), TrackerError> {
        let employees = repository::employees::list_employees(&self.pool).await?;
        if employees.is_empty() {
            println!("There are no employees to update. Add an employee first.");
            return Ok(());
        }
        // No "None" sentinel here: a manager cannot be unset through this flow.
        let employee_choices = choice::employee_choices(&employees, false);

        let roles = repository::roles::list_roles(&self.pool).await?;
        if roles.is_empty() {
            println!("There are no roles to assign. Add a role first.");
            return Ok(());
        }
        let role_choices = choice::role_choices(&roles);

        let index = self.prompt.select(
            "Which employee's role do you want to update?",
            &labels(&employee_choices),
        )?;
        // Without the sentinel every entry carries an id.
        let Some(employee_id) = employee_choices[index].value else {
            return Ok(());
        };

        let index = self.prompt.select(
            "Which role do you want to assign the selected employee?",
            &labels(&role_choices),
        )?;
        let role_id = role_choices[index].value;

        repository::employees::update_employee_role(&self.pool, employee_id, role_id).await?;
        println!("Updated employee's role");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Report handlers
    // ------------------------------------------------------------------

    async fn display_departments(&mut self) -> Result<(), TrackerError> {
        let rows = repository::departments::list_departments(&self.pool).await?;
        let mut table = Table::new(["id", "name"]);
        for row in rows {
            table.add_row(vec![row.id.to_string(), row.name]);
        }
        println!("{}", table.render());
        Ok(())
    }

    async fn display_roles(&mut self) -> Result<(), TrackerError> {
        let rows = repository::roles::list_role_report(&self.pool).await?;
        let mut table = Table::new(["id", "title", "department", "salary"]);
        for row in rows {
            table.add_row(vec![
                row.id.to_string(),
                row.title,
                row.department,
                row.salary.to_string(),
            ]);
        }
        println!("{}", table.render());
        Ok(())
    }

    async fn display_employees(&mut self) -> Result<(), TrackerError> {
        let rows = repository::employees::list_employee_report(&self.pool).await?;
        let mut table = Table::new([
            "id",
            "first_name",
            "last_name",
            "title",
            "department",
            "salary",
            "manager",
        ]);
        for row in rows {
            table.add_row(vec![
                row.id.to_string(),
                row.first_name,
                row.last_name,
                row.title,
                row.department,
                row.salary.to_string(),
                row.manager.unwrap_or_default(),
            ]);
        }
        println!("{}", table.render());
        Ok(())
    }
}
