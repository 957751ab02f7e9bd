//! End-to-end handler contract: status codes, bodies, and the scenarios
//! from the dashboard flows.

use rusqlite::Connection;
use workboard_core::api::{
    create_project, create_task, delete_project, delete_task, list_projects, list_tasks,
    update_project, update_task, CreateProjectRequest, CreateTaskRequest, UpdateProjectRequest,
    UpdateTaskRequest,
};
use workboard_core::db::open_db_in_memory;
use workboard_core::{
    LogEventPublisher, MemoryCache, ProjectService, SqliteProjectRepository, SqliteTaskRepository,
    SqliteUserRepository, TaskService, TaskStatus, User, UserId, UserRepository,
};

type TestProjectService<'a> =
    ProjectService<SqliteProjectRepository<'a>, MemoryCache, LogEventPublisher>;
type TestTaskService<'a> = TaskService<
    SqliteProjectRepository<'a>,
    SqliteTaskRepository<'a>,
    MemoryCache,
    LogEventPublisher,
>;

fn seed_user(conn: &Connection) -> UserId {
    let user = User::new("Owner", "owner@example.com", "hash");
    SqliteUserRepository::new(conn).create(&user).unwrap();
    user.id
}

fn project_service(conn: &Connection) -> TestProjectService<'_> {
    ProjectService::new(
        SqliteProjectRepository::new(conn),
        MemoryCache::new(),
        LogEventPublisher,
    )
}

fn task_service(conn: &Connection) -> TestTaskService<'_> {
    TaskService::new(
        SqliteProjectRepository::new(conn),
        SqliteTaskRepository::new(conn),
        MemoryCache::new(),
        LogEventPublisher,
    )
}

#[test]
fn full_project_and_task_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let user_id = seed_user(&conn);
    let projects = project_service(&conn);
    let tasks = task_service(&conn);

    // Create with no status: 201 and the documented default.
    let request = CreateProjectRequest {
        name: "Launch".to_string(),
        priority: Some(workboard_core::Priority::High),
        ..CreateProjectRequest::default()
    };
    let created = create_project(&projects, Some(user_id), request);
    assert_eq!(created.status, 201);
    assert_eq!(created.body["status"], "IN_PROGRESS");
    assert_eq!(created.body["priority"], "HIGH");
    let project_id = created.body["id"].as_str().unwrap().to_string();

    // Soft delete: 200 + INACTIVE, idempotent.
    let deleted = delete_project(&projects, &project_id);
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body["status"], "INACTIVE");

    let deleted_again = delete_project(&projects, &project_id);
    assert_eq!(deleted_again.status, 200);
    assert_eq!(deleted_again.body["status"], "INACTIVE");

    // Task creation succeeds under the (inactive) existing parent.
    let task_request = CreateTaskRequest {
        name: "Spec doc".to_string(),
        status: Some(TaskStatus::Pending),
    };
    let task_created = create_task(&tasks, Some(project_id.as_str()), task_request);
    assert_eq!(task_created.status, 201);
    assert_eq!(task_created.body["status"], "PENDING");
    let task_id = task_created.body["id"].as_str().unwrap().to_string();

    // Task soft delete: 200 + ARCHIVED.
    let task_deleted = delete_task(&tasks, &project_id, &task_id);
    assert_eq!(task_deleted.status, 200);
    assert_eq!(task_deleted.body["status"], "ARCHIVED");
}

#[test]
fn create_project_without_actor_is_401() {
    let conn = open_db_in_memory().unwrap();
    seed_user(&conn);
    let projects = project_service(&conn);

    let request = CreateProjectRequest {
        name: "Launch".to_string(),
        ..CreateProjectRequest::default()
    };
    let response = create_project(&projects, None, request);
    assert_eq!(response.status, 401);
    assert_eq!(response.body["error"], "Unauthorized: No user id");
}

#[test]
fn update_project_parses_deadline_dates() {
    let conn = open_db_in_memory().unwrap();
    let user_id = seed_user(&conn);
    let projects = project_service(&conn);

    let created = create_project(
        &projects,
        Some(user_id),
        CreateProjectRequest {
            name: "Launch".to_string(),
            ..CreateProjectRequest::default()
        },
    );
    let project_id = created.body["id"].as_str().unwrap().to_string();

    let updated = update_project(
        &projects,
        &project_id,
        UpdateProjectRequest {
            deadline: Some("2026-09-01".to_string()),
            ..UpdateProjectRequest::default()
        },
    );
    assert_eq!(updated.status, 200);
    assert!(updated.body["deadline"].as_i64().unwrap() > 0);

    let rejected = update_project(
        &projects,
        &project_id,
        UpdateProjectRequest {
            deadline: Some("next tuesday".to_string()),
            ..UpdateProjectRequest::default()
        },
    );
    assert_eq!(rejected.status, 400);
}

#[test]
fn update_project_on_unknown_id_is_500() {
    let conn = open_db_in_memory().unwrap();
    seed_user(&conn);
    let projects = project_service(&conn);

    let response = update_project(
        &projects,
        &uuid::Uuid::new_v4().to_string(),
        UpdateProjectRequest {
            name: Some("ghost".to_string()),
            ..UpdateProjectRequest::default()
        },
    );
    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "Internal Server Error: updateProject");
}

#[test]
fn create_task_without_project_id_is_400() {
    let conn = open_db_in_memory().unwrap();
    seed_user(&conn);
    let tasks = task_service(&conn);

    let request = CreateTaskRequest {
        name: "Spec doc".to_string(),
        status: None,
    };
    let missing = create_task(&tasks, None, request.clone());
    assert_eq!(missing.status, 400);
    assert_eq!(missing.body["error"], "Project id is required");

    let blank = create_task(&tasks, Some("   "), request);
    assert_eq!(blank.status, 400);
}

#[test]
fn create_task_under_unknown_project_is_404_with_no_row() {
    let conn = open_db_in_memory().unwrap();
    seed_user(&conn);
    let tasks = task_service(&conn);

    let request = CreateTaskRequest {
        name: "Spec doc".to_string(),
        status: Some(TaskStatus::Pending),
    };
    let unknown_project = uuid::Uuid::new_v4().to_string();
    let response = create_task(&tasks, Some(unknown_project.as_str()), request);
    assert_eq!(response.status, 404);
    assert_eq!(response.body["error"], "Project not found");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM tasks;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn update_task_from_another_project_is_404() {
    let conn = open_db_in_memory().unwrap();
    let user_id = seed_user(&conn);
    let projects = project_service(&conn);
    let tasks = task_service(&conn);

    let project_a = create_project(
        &projects,
        Some(user_id),
        CreateProjectRequest {
            name: "A".to_string(),
            ..CreateProjectRequest::default()
        },
    );
    let project_b = create_project(
        &projects,
        Some(user_id),
        CreateProjectRequest {
            name: "B".to_string(),
            ..CreateProjectRequest::default()
        },
    );
    let project_a_id = project_a.body["id"].as_str().unwrap().to_string();
    let project_b_id = project_b.body["id"].as_str().unwrap().to_string();

    let task = create_task(
        &tasks,
        Some(project_a_id.as_str()),
        CreateTaskRequest {
            name: "Spec doc".to_string(),
            status: None,
        },
    );
    let task_id = task.body["id"].as_str().unwrap().to_string();

    let response = update_task(
        &tasks,
        &project_b_id,
        &task_id,
        UpdateTaskRequest {
            status: TaskStatus::Completed,
        },
    );
    assert_eq!(response.status, 404);
    assert_eq!(response.body["error"], "Task not found for the given project");

    // And the happy path still works against the right parent.
    let ok = update_task(
        &tasks,
        &project_a_id,
        &task_id,
        UpdateTaskRequest {
            status: TaskStatus::Completed,
        },
    );
    assert_eq!(ok.status, 200);
    assert_eq!(ok.body["status"], "COMPLETED");
}

#[test]
fn list_endpoints_return_scoped_collections() {
    let conn = open_db_in_memory().unwrap();
    let user_id = seed_user(&conn);
    let projects = project_service(&conn);
    let tasks = task_service(&conn);

    let created = create_project(
        &projects,
        Some(user_id),
        CreateProjectRequest {
            name: "Launch".to_string(),
            ..CreateProjectRequest::default()
        },
    );
    let project_id = created.body["id"].as_str().unwrap().to_string();

    for name in ["one", "two"] {
        let response = create_task(
            &tasks,
            Some(project_id.as_str()),
            CreateTaskRequest {
                name: name.to_string(),
                status: None,
            },
        );
        assert_eq!(response.status, 201);
    }

    let project_list = list_projects(&projects, user_id);
    assert_eq!(project_list.status, 200);
    assert_eq!(project_list.body.as_array().unwrap().len(), 1);

    let task_list = list_tasks(&tasks, &project_id);
    assert_eq!(task_list.status, 200);
    assert_eq!(task_list.body.as_array().unwrap().len(), 2);
}
