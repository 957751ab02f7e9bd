use rusqlite::Connection;
use workboard_core::db::open_db_in_memory;
use workboard_core::{
    Project, ProjectId, ProjectRepository, RepoError, SqliteProjectRepository,
    SqliteTaskRepository, SqliteUserRepository, Task, TaskRepository, TaskStatus, User,
    UserRepository,
};

fn seed_project(conn: &Connection) -> ProjectId {
    let user = User::new("Owner", "owner@example.com", "hash");
    SqliteUserRepository::new(conn).create(&user).unwrap();

    let project = Project::new(user.id, "Launch");
    SqliteProjectRepository::new(conn)
        .create(&project)
        .unwrap();
    project.id
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let project_id = seed_project(&conn);
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new(project_id, "Spec doc");
    repo.create(&task).unwrap();

    let loaded = repo.get(task.id).unwrap().unwrap();
    assert_eq!(loaded, task);
    assert_eq!(loaded.status, TaskStatus::Pending);
}

#[test]
fn create_rejects_blank_name() {
    let conn = open_db_in_memory().unwrap();
    let project_id = seed_project(&conn);
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new(project_id, "");
    let err = repo.create(&task).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn create_without_valid_project_reference_fails() {
    let conn = open_db_in_memory().unwrap();
    seed_project(&conn);
    let repo = SqliteTaskRepository::new(&conn);

    let orphan = Task::new(uuid::Uuid::new_v4(), "orphan");
    let err = repo.create(&orphan).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(repo.get(orphan.id).unwrap().is_none());
}

#[test]
fn set_status_archives_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let project_id = seed_project(&conn);
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new(project_id, "Spec doc");
    repo.create(&task).unwrap();

    let archived = repo.set_status(task.id, TaskStatus::Archived).unwrap();
    assert_eq!(archived.status, TaskStatus::Archived);

    let archived_again = repo.set_status(task.id, TaskStatus::Archived).unwrap();
    assert_eq!(archived_again.status, TaskStatus::Archived);
}

#[test]
fn set_status_on_missing_task_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    seed_project(&conn);
    let repo = SqliteTaskRepository::new(&conn);

    let missing = uuid::Uuid::new_v4();
    let err = repo.set_status(missing, TaskStatus::Completed).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn list_for_project_scopes_to_one_project() {
    let conn = open_db_in_memory().unwrap();
    let user = User::new("Owner", "owner@example.com", "hash");
    SqliteUserRepository::new(&conn).create(&user).unwrap();

    let project_repo = SqliteProjectRepository::new(&conn);
    let project_a = Project::new(user.id, "A");
    let project_b = Project::new(user.id, "B");
    project_repo.create(&project_a).unwrap();
    project_repo.create(&project_b).unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    repo.create(&Task::new(project_a.id, "a-1")).unwrap();
    repo.create(&Task::new(project_a.id, "a-2")).unwrap();
    repo.create(&Task::new(project_b.id, "b-1")).unwrap();

    let tasks = repo.list_for_project(project_a.id).unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|task| task.project_id == project_a.id));
}
