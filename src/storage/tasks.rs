//! `SQLite` implementation of the task store.

use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{params, OptionalExtension, Row, Transaction};
use tracing::{debug, info};

use crate::core::{filter_tasks, TaskFilter};
use crate::error::TasklineError;
use crate::features::nlp::Priority;
use crate::tasks::{NewTask, Project, Status, Task, TaskStore};

use super::Database;

const TASK_COLUMNS: &str = "t.id, t.title, t.description, t.priority, t.due_date, t.reminder_time,
     p.name, t.status, t.position, t.created_at, t.completed_at";

/// A task row before its text columns are validated.
struct TaskRow {
    id: i64,
    title: String,
    description: String,
    priority: String,
    due_date: Option<NaiveDate>,
    reminder_time: Option<NaiveDateTime>,
    project: Option<String>,
    status: String,
    position: i64,
    created_at: NaiveDateTime,
    completed_at: Option<NaiveDateTime>,
}

impl TaskRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            priority: row.get(3)?,
            due_date: row.get(4)?,
            reminder_time: row.get(5)?,
            project: row.get(6)?,
            status: row.get(7)?,
            position: row.get(8)?,
            created_at: row.get(9)?,
            completed_at: row.get(10)?,
        })
    }
}

impl TryFrom<TaskRow> for Task {
    type Error = TasklineError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let priority = row
            .priority
            .parse::<Priority>()
            .map_err(TasklineError::Database)?;

        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            priority,
            due_date: row.due_date,
            reminder_time: row.reminder_time,
            project: row.project,
            status: row.status.parse()?,
            position: row.position,
            created_at: row.created_at,
            completed_at: row.completed_at,
        })
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Database {
    fn query_task(&self, id: i64) -> Result<Option<Task>, TasklineError> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks t LEFT JOIN projects p ON p.id = t.project_id
             WHERE t.id = ?1"
        );
        self.conn
            .query_row(&sql, [id], TaskRow::from_row)
            .optional()?
            .map(Task::try_from)
            .transpose()
    }

    fn set_status(&self, id: i64, status: Status) -> Result<Task, TasklineError> {
        let completed_at = (status == Status::Completed).then(now);
        let changed = self.conn.execute(
            "UPDATE tasks SET status = ?1, completed_at = ?2 WHERE id = ?3",
            params![status.as_str(), completed_at, id],
        )?;
        if changed == 0 {
            return Err(TasklineError::task_not_found(id));
        }
        debug!(id, %status, "task status changed");
        self.get_task(id)
    }
}

/// Find a project id by name, creating the project if needed.
fn resolve_project_id(tx: &Transaction<'_>, name: &str) -> Result<i64, TasklineError> {
    let existing: Option<i64> = tx
        .query_row("SELECT id FROM projects WHERE name = ?1", [name], |row| row.get(0))
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    tx.execute(
        "INSERT INTO projects (name, created_at) VALUES (?1, ?2)",
        params![name, now()],
    )?;
    debug!(project = name, "created project on demand");
    Ok(tx.last_insert_rowid())
}

impl TaskStore for Database {
    fn create_task(&self, task: &NewTask) -> Result<Task, TasklineError> {
        let tx = self.conn.unchecked_transaction()?;

        let project_id = task
            .project
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| resolve_project_id(&tx, name))
            .transpose()?;

        let position: i64 =
            tx.query_row("SELECT COALESCE(MAX(position), 0) + 1 FROM tasks", [], |row| row.get(0))?;

        tx.execute(
            "INSERT INTO tasks
                 (title, description, priority, due_date, reminder_time, project_id, status, position, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'open', ?7, ?8)",
            params![
                task.title,
                task.description,
                task.priority.as_str(),
                task.due_date,
                task.reminder_time,
                project_id,
                position,
                now(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(id, title = %task.title, priority = %task.priority, "task created");
        self.get_task(id)
    }

    fn get_task(&self, id: i64) -> Result<Task, TasklineError> {
        self.query_task(id)?
            .ok_or_else(|| TasklineError::task_not_found(id))
    }

    fn list_tasks(&self, filter: &TaskFilter, today: NaiveDate) -> Result<Vec<Task>, TasklineError> {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks t LEFT JOIN projects p ON p.id = t.project_id
             ORDER BY t.position, t.id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let tasks = stmt
            .query_map([], TaskRow::from_row)?
            .map(|row| Task::try_from(row?))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(filter_tasks(&tasks, filter, today))
    }

    fn complete_task(&self, id: i64) -> Result<Task, TasklineError> {
        self.set_status(id, Status::Completed)
    }

    fn reopen_task(&self, id: i64) -> Result<Task, TasklineError> {
        self.set_status(id, Status::Open)
    }

    fn delete_task(&self, id: i64) -> Result<(), TasklineError> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(TasklineError::task_not_found(id));
        }
        debug!(id, "task deleted");
        Ok(())
    }

    fn create_project(&self, name: &str) -> Result<Project, TasklineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TasklineError::InvalidInput("project name is empty".to_string()));
        }
        if self.find_project(name)?.is_some() {
            return Err(TasklineError::InvalidInput(format!(
                "project '{name}' already exists"
            )));
        }

        let created_at = now();
        self.conn.execute(
            "INSERT INTO projects (name, created_at) VALUES (?1, ?2)",
            params![name, created_at],
        )?;
        info!(project = name, "project created");

        Ok(Project {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            created_at,
            open_tasks: 0,
        })
    }

    fn list_projects(&self) -> Result<Vec<Project>, TasklineError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, p.created_at,
                    COALESCE(SUM(CASE WHEN t.status = 'open' THEN 1 ELSE 0 END), 0)
             FROM projects p LEFT JOIN tasks t ON t.project_id = p.id
             GROUP BY p.id
             ORDER BY p.name COLLATE NOCASE",
        )?;
        let projects = stmt
            .query_map([], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: row.get(2)?,
                    open_tasks: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    fn find_project(&self, name: &str) -> Result<Option<Project>, TasklineError> {
        let project = self
            .conn
            .query_row(
                "SELECT id, name, created_at FROM projects WHERE name = ?1",
                [name.trim()],
                |row| {
                    Ok(Project {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        created_at: row.get(2)?,
                        open_tasks: 0,
                    })
                },
            )
            .optional()?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DueFilter, StatusFilter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
    }

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_create_and_get_task() {
        let db = db();
        let new = NewTask::new("Call mom")
            .unwrap()
            .with_priority(Priority::High)
            .with_due_date(NaiveDate::from_ymd_opt(2026, 4, 16));

        let task = db.create_task(&new).unwrap();
        assert_eq!(task.title, "Call mom");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 4, 16));
        assert_eq!(task.status, Status::Open);
        assert_eq!(db.get_task(task.id).unwrap(), task);
    }

    #[test]
    fn test_positions_append() {
        let db = db();
        let a = db.create_task(&NewTask::new("a").unwrap()).unwrap();
        let b = db.create_task(&NewTask::new("b").unwrap()).unwrap();
        assert_eq!(a.position, 1);
        assert_eq!(b.position, 2);
    }

    #[test]
    fn test_reminder_round_trip() {
        let db = db();
        let mut new = NewTask::new("Meeting").unwrap();
        new.reminder_time = today().and_hms_opt(15, 0, 0);

        let task = db.create_task(&new).unwrap();
        assert_eq!(task.reminder_time, today().and_hms_opt(15, 0, 0));
    }

    #[test]
    fn test_project_created_on_demand() {
        let db = db();
        let new = NewTask::new("Fix sink")
            .unwrap()
            .with_project(Some("Home".to_string()));
        db.create_task(&new).unwrap();

        let again = NewTask::new("Paint fence")
            .unwrap()
            .with_project(Some("home".to_string()));
        let task = db.create_task(&again).unwrap();
        assert_eq!(task.project.as_deref(), Some("Home"));

        let projects = db.list_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].open_tasks, 2);
    }

    #[test]
    fn test_complete_and_reopen() {
        let db = db();
        let task = db.create_task(&NewTask::new("Buy milk").unwrap()).unwrap();

        let done = db.complete_task(task.id).unwrap();
        assert_eq!(done.status, Status::Completed);
        assert!(done.completed_at.is_some());

        let open = db.reopen_task(task.id).unwrap();
        assert_eq!(open.status, Status::Open);
        assert!(open.completed_at.is_none());
    }

    #[test]
    fn test_missing_task_errors() {
        let db = db();
        assert!(matches!(db.get_task(99), Err(TasklineError::NotFound { .. })));
        assert!(matches!(db.complete_task(99), Err(TasklineError::NotFound { .. })));
        assert!(matches!(db.delete_task(99), Err(TasklineError::NotFound { .. })));
    }

    #[test]
    fn test_delete_task() {
        let db = db();
        let task = db.create_task(&NewTask::new("Temp").unwrap()).unwrap();
        db.delete_task(task.id).unwrap();
        assert!(db.get_task(task.id).is_err());
    }

    #[test]
    fn test_list_tasks_applies_filter() {
        let db = db();
        let due_today = NewTask::new("Today thing").unwrap().with_due_date(Some(today()));
        db.create_task(&due_today).unwrap();
        let done = db.create_task(&NewTask::new("Done thing").unwrap()).unwrap();
        db.complete_task(done.id).unwrap();
        db.create_task(&NewTask::new("Someday thing").unwrap()).unwrap();

        let open = db.list_tasks(&TaskFilter::default(), today()).unwrap();
        assert_eq!(open.len(), 2);

        let all = db
            .list_tasks(
                &TaskFilter {
                    status: StatusFilter::All,
                    ..TaskFilter::default()
                },
                today(),
            )
            .unwrap();
        assert_eq!(all.len(), 3);

        let today_only = db
            .list_tasks(
                &TaskFilter {
                    due: Some(DueFilter::Today),
                    ..TaskFilter::default()
                },
                today(),
            )
            .unwrap();
        assert_eq!(today_only.len(), 1);
        assert_eq!(today_only[0].title, "Today thing");
    }

    #[test]
    fn test_create_project_rejects_duplicates() {
        let db = db();
        db.create_project("Work").unwrap();
        assert!(matches!(
            db.create_project("work"),
            Err(TasklineError::InvalidInput(_))
        ));
        assert!(matches!(db.create_project("  "), Err(TasklineError::InvalidInput(_))));
    }

    #[test]
    fn test_find_project_ignores_case() {
        let db = db();
        db.create_project("Garden").unwrap();
        assert!(db.find_project("GARDEN").unwrap().is_some());
        assert!(db.find_project("Kitchen").unwrap().is_none());
    }
}
