use mechanics_core::{
    seed_demo_data, BlogPostPatch, BlogService, BlogServiceError, DashboardService, MemoryStore,
    NewBlogPost, NewComment, NewProject, NewTask, NewUser, ProjectStatus, TaskStatus, UserPatch,
    UserService, UserServiceError,
};

fn post(slug: &str, published: bool) -> NewBlogPost {
    NewBlogPost {
        title: format!("Post {slug}"),
        slug: slug.to_string(),
        content: "<p>body</p>".to_string(),
        category: "Project Management".to_string(),
        published,
        ..NewBlogPost::default()
    }
}

fn user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "password123".to_string(),
        email: format!("{username}@example.com"),
        full_name: username.to_string(),
        role: None,
    }
}

#[test]
fn duplicate_slug_is_rejected_on_create() {
    let store = MemoryStore::new();
    let service = BlogService::new(&store);
    service.create_post(post("kickoff", false)).unwrap();

    let err = service.create_post(post("kickoff", true)).unwrap_err();
    assert_eq!(err, BlogServiceError::SlugTaken("kickoff".to_string()));
    assert_eq!(store.blog_posts().len(), 1);
}

#[test]
fn slug_update_conflicts_only_with_other_posts() {
    let store = MemoryStore::new();
    let service = BlogService::new(&store);
    let first = service.create_post(post("first", false)).unwrap();
    service.create_post(post("second", false)).unwrap();

    let same = BlogPostPatch {
        slug: Some("first".to_string()),
        ..BlogPostPatch::default()
    };
    assert!(service.update_post(&first.id, same).is_ok());

    let taken = BlogPostPatch {
        slug: Some("second".to_string()),
        ..BlogPostPatch::default()
    };
    let err = service.update_post(&first.id, taken).unwrap_err();
    assert_eq!(err, BlogServiceError::SlugTaken("second".to_string()));
    assert_eq!(store.blog_posts().get(&first.id).unwrap().slug, "first");

    let missing = service
        .update_post("nope", BlogPostPatch::default())
        .unwrap_err();
    assert_eq!(missing, BlogServiceError::PostNotFound("nope".to_string()));
}

#[test]
fn published_list_and_slug_lookup() {
    let store = MemoryStore::new();
    let service = BlogService::new(&store);
    service.create_post(post("draft", false)).unwrap();
    let live = service.create_post(post("live", true)).unwrap();

    let published = service.list_posts(true);
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, live.id);
    assert_eq!(service.list_posts(false).len(), 2);
    assert_eq!(service.get_by_slug("live").unwrap().id, live.id);
    assert!(service.get_by_slug("missing").is_none());
}

#[test]
fn comments_for_post() {
    let store = MemoryStore::new();
    let service = BlogService::new(&store);
    let live = service.create_post(post("live", true)).unwrap();
    store.comments().create(NewComment {
        content: "great read".to_string(),
        post_id: live.id.clone(),
        ..NewComment::default()
    });

    assert_eq!(service.comments_for(&live.id).len(), 1);
    assert!(service.comments_for("other").is_empty());
}

#[test]
fn duplicate_username_is_rejected() {
    let store = MemoryStore::new();
    let service = UserService::new(&store);
    let sarah = service.create_user(user("sarah")).unwrap();
    service.create_user(user("alex")).unwrap();

    let err = service.create_user(user("sarah")).unwrap_err();
    assert_eq!(err, UserServiceError::UsernameTaken("sarah".to_string()));

    let rename = UserPatch {
        username: Some("alex".to_string()),
        ..UserPatch::default()
    };
    let err = service.update_user(&sarah.id, rename).unwrap_err();
    assert_eq!(err, UserServiceError::UsernameTaken("alex".to_string()));

    assert_eq!(service.get_by_username("sarah").unwrap().id, sarah.id);
    assert_eq!(store.users().len(), 2);
}

#[test]
fn dashboard_summary_counts_seeded_data() {
    let store = MemoryStore::new();
    seed_demo_data(&store);

    let summary = DashboardService::new(&store).summary();
    assert_eq!(summary.total_programs, 2);
    assert_eq!(summary.active_programs, 2);
    assert_eq!(summary.total_projects, 2);
    assert_eq!(summary.active_projects, 1);
    assert_eq!(summary.total_tasks, 2);
    assert_eq!(summary.open_tasks, 1);
    assert_eq!(summary.completed_tasks, 1);
    assert_eq!(summary.average_progress, 50);
    assert_eq!(summary.published_posts, 2);
}

#[test]
fn dashboard_summary_of_empty_store_is_zero() {
    let store = MemoryStore::new();
    let summary = DashboardService::new(&store).summary();

    assert_eq!(summary, Default::default());
}

#[test]
fn dashboard_summary_tracks_updates() {
    let store = MemoryStore::new();
    store.projects().create(NewProject {
        name: "Live".to_string(),
        status: Some(ProjectStatus::Active),
        progress: Some(33),
        ..NewProject::default()
    });
    store.tasks().create(NewTask {
        title: "done".to_string(),
        status: Some(TaskStatus::Completed),
        ..NewTask::default()
    });

    let summary = DashboardService::new(&store).summary();
    assert_eq!(summary.active_projects, 1);
    assert_eq!(summary.average_progress, 33);
    assert_eq!(summary.open_tasks, 0);
    assert_eq!(summary.completed_tasks, 1);

    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["averageProgress"], 33);
    assert_eq!(json["completedTasks"], 1);
}
