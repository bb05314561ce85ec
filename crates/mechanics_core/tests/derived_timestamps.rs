use chrono::{Duration, TimeZone, Utc};
use mechanics_core::{
    BlogPostPatch, MemoryStore, NewBlogPost, NewTask, TaskPatch, TaskStatus, Timestamp,
};

fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 12, 1, 8, 0, 0).unwrap()
}

fn status_patch(status: TaskStatus) -> TaskPatch {
    TaskPatch {
        status: Some(status),
        ..TaskPatch::default()
    }
}

fn draft(slug: &str) -> NewBlogPost {
    NewBlogPost {
        title: "Draft".to_string(),
        slug: slug.to_string(),
        content: "<p>body</p>".to_string(),
        category: "Best Practices".to_string(),
        ..NewBlogPost::default()
    }
}

#[test]
fn task_created_completed_is_stamped_at_creation() {
    let store = MemoryStore::new();
    let task = store.tasks().create_at(
        NewTask {
            title: "done already".to_string(),
            status: Some(TaskStatus::Completed),
            ..NewTask::default()
        },
        t0(),
    );

    assert_eq!(task.completed_at, Some(t0()));
}

#[test]
fn task_created_open_has_no_completion_stamp() {
    let store = MemoryStore::new();
    let task = store.tasks().create_at(
        NewTask {
            title: "todo".to_string(),
            ..NewTask::default()
        },
        t0(),
    );

    assert_eq!(task.status, TaskStatus::Todo);
    assert!(task.completed_at.is_none());
}

#[test]
fn task_completed_by_update_is_stamped_at_update_time() {
    let store = MemoryStore::new();
    let task = store.tasks().create_at(
        NewTask {
            title: "work".to_string(),
            status: Some(TaskStatus::InProgress),
            ..NewTask::default()
        },
        t0(),
    );

    let later = t0() + Duration::days(2);
    let updated = store
        .tasks()
        .update_at(&task.id, status_patch(TaskStatus::Completed), later)
        .unwrap();

    assert_eq!(updated.completed_at, Some(later));
    assert_eq!(updated.updated_at, later);
}

#[test]
fn task_completion_stamp_is_kept_when_reopened() {
    let store = MemoryStore::new();
    let task = store.tasks().create_at(
        NewTask {
            title: "flaky".to_string(),
            status: Some(TaskStatus::Completed),
            ..NewTask::default()
        },
        t0(),
    );

    let reopened = store
        .tasks()
        .update_at(
            &task.id,
            status_patch(TaskStatus::Blocked),
            t0() + Duration::hours(3),
        )
        .unwrap();
    assert_eq!(reopened.status, TaskStatus::Blocked);
    assert_eq!(reopened.completed_at, Some(t0()));

    let recompleted = store
        .tasks()
        .update_at(
            &task.id,
            status_patch(TaskStatus::Completed),
            t0() + Duration::hours(6),
        )
        .unwrap();
    assert_eq!(recompleted.completed_at, Some(t0()));
}

#[test]
fn task_update_without_status_does_not_stamp() {
    let store = MemoryStore::new();
    let task = store.tasks().create_at(
        NewTask {
            title: "rename me".to_string(),
            ..NewTask::default()
        },
        t0(),
    );

    let renamed = store
        .tasks()
        .update_at(
            &task.id,
            TaskPatch {
                title: Some("renamed".to_string()),
                ..TaskPatch::default()
            },
            t0() + Duration::minutes(1),
        )
        .unwrap();
    assert!(renamed.completed_at.is_none());
}

#[test]
fn post_created_published_is_stamped_at_creation() {
    let store = MemoryStore::new();
    let post = store.blog_posts().create_at(
        NewBlogPost {
            published: true,
            ..draft("live")
        },
        t0(),
    );

    assert_eq!(post.published_at, Some(t0()));
}

#[test]
fn post_created_as_draft_has_no_publish_stamp() {
    let store = MemoryStore::new();
    let post = store.blog_posts().create_at(draft("draft"), t0());

    assert!(!post.published);
    assert!(post.published_at.is_none());
}

#[test]
fn post_published_by_update_is_stamped_once() {
    let store = MemoryStore::new();
    let post = store.blog_posts().create_at(draft("later"), t0());
    let publish = || BlogPostPatch {
        published: Some(true),
        ..BlogPostPatch::default()
    };

    let first = t0() + Duration::days(1);
    let published = store
        .blog_posts()
        .update_at(&post.id, publish(), first)
        .unwrap();
    assert_eq!(published.published_at, Some(first));

    let again = store
        .blog_posts()
        .update_at(&post.id, publish(), first + Duration::days(1))
        .unwrap();
    assert_eq!(again.published_at, Some(first));
}

#[test]
fn post_publish_stamp_is_kept_when_unpublished() {
    let store = MemoryStore::new();
    let post = store.blog_posts().create_at(
        NewBlogPost {
            published: true,
            ..draft("retracted")
        },
        t0(),
    );

    let unpublished = store
        .blog_posts()
        .update_at(
            &post.id,
            BlogPostPatch {
                published: Some(false),
                ..BlogPostPatch::default()
            },
            t0() + Duration::hours(1),
        )
        .unwrap();

    assert!(!unpublished.published);
    assert_eq!(unpublished.published_at, Some(t0()));
}

#[test]
fn unrelated_update_after_publish_keeps_publish_stamp() {
    let store = MemoryStore::new();
    let post = store.blog_posts().create_at(draft("worked-example"), t0());
    assert!(post.published_at.is_none());

    let published_on = t0() + Duration::hours(1);
    let published = store
        .blog_posts()
        .update_at(
            &post.id,
            BlogPostPatch {
                published: Some(true),
                ..BlogPostPatch::default()
            },
            published_on,
        )
        .unwrap();
    assert_eq!(published.published_at, Some(published_on));

    let retitled = store
        .blog_posts()
        .update_at(
            &post.id,
            BlogPostPatch {
                title: Some("x".to_string()),
                ..BlogPostPatch::default()
            },
            published_on + Duration::hours(1),
        )
        .unwrap();
    assert_eq!(retitled.title, "x");
    assert_eq!(retitled.published_at, Some(published_on));
}
