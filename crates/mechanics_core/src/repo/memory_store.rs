//! Process-lifetime record store owning all seven collections.
//!
//! # Responsibility
//! - Group the per-entity collections behind one handle that callers
//!   construct once and share (`Arc<MemoryStore>`).
//! - Provide foreign-key filters and secondary-key lookups.
//!
//! # Invariants
//! - No durability: contents live as long as the store value.
//! - No cascades: deleting a parent leaves children pointing at a missing id.
//! - Secondary keys (`slug`, `username`) are scanned, not indexed; uniqueness
//!   is enforced by callers before writing.

use crate::model::blog_post::BlogPost;
use crate::model::comment::Comment;
use crate::model::media::Media;
use crate::model::program::Program;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::user::User;
use crate::repo::collection::Collection;

/// In-memory store holding every entity collection.
#[derive(Default)]
pub struct MemoryStore {
    programs: Collection<Program>,
    projects: Collection<Project>,
    tasks: Collection<Task>,
    blog_posts: Collection<BlogPost>,
    comments: Collection<Comment>,
    users: Collection<User>,
    media: Collection<Media>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn programs(&self) -> &Collection<Program> {
        &self.programs
    }

    pub fn projects(&self) -> &Collection<Project> {
        &self.projects
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }

    pub fn blog_posts(&self) -> &Collection<BlogPost> {
        &self.blog_posts
    }

    pub fn comments(&self) -> &Collection<Comment> {
        &self.comments
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn media(&self) -> &Collection<Media> {
        &self.media
    }

    /// Projects whose `program_id` equals `program_id`.
    pub fn projects_by_program(&self, program_id: &str) -> Vec<Project> {
        self.projects
            .filter(|project| project.program_id.as_deref() == Some(program_id))
    }

    /// Tasks whose `project_id` equals `project_id`.
    pub fn tasks_by_project(&self, project_id: &str) -> Vec<Task> {
        self.tasks
            .filter(|task| task.project_id.as_deref() == Some(project_id))
    }

    /// Comments attached to `post_id`.
    pub fn comments_by_post(&self, post_id: &str) -> Vec<Comment> {
        self.comments.filter(|comment| comment.post_id == post_id)
    }

    pub fn published_blog_posts(&self) -> Vec<BlogPost> {
        self.blog_posts.filter(|post| post.published)
    }

    pub fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.blog_posts.find(|post| post.slug == slug)
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }
}
