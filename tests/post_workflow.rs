use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use postdesk::application::posts::{
    DeleteOutcome, PostFormController, PostFormError, PostListController, SubmitOutcome,
};
use postdesk::application::store::PostStore;
use postdesk::application::ui::{ConfirmPrompt, Decision, Dialogs, Navigator, Notice, NoticeKind};
use postdesk::domain::categories::CategoryCatalog;
use postdesk::domain::entities::{Post, PostId};
use postdesk::domain::filter::visible_posts;
use postdesk::domain::form::FormMode;
use postdesk::domain::ids::PostIdGenerator;
use postdesk::infra::memory::InMemoryPostStore;
use time::macros::datetime;

#[derive(Default)]
struct FakeDialogs {
    decisions: Mutex<VecDeque<Decision>>,
    confirmations: Mutex<usize>,
    notices: Mutex<Vec<Notice>>,
}

impl FakeDialogs {
    fn answering(decision: Decision) -> Self {
        Self {
            decisions: Mutex::new(VecDeque::from([decision])),
            ..Default::default()
        }
    }

    fn notices(&self) -> Vec<(NoticeKind, String, String)> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|notice| (notice.kind, notice.title.clone(), notice.text.clone()))
            .collect()
    }
}

#[async_trait]
impl Dialogs for FakeDialogs {
    async fn confirm(&self, _prompt: &ConfirmPrompt) -> Decision {
        *self.confirmations.lock().unwrap() += 1;
        self.decisions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Decision::Cancelled)
    }

    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Nav {
    Edit(PostId),
    List,
}

#[derive(Default)]
struct FakeNavigator {
    calls: Mutex<Vec<Nav>>,
}

impl Navigator for FakeNavigator {
    fn open_form_for_edit(&self, id: PostId) {
        self.calls.lock().unwrap().push(Nav::Edit(id));
    }

    fn navigate_to_list(&self) {
        self.calls.lock().unwrap().push(Nav::List);
    }
}

fn post(id: PostId, title: &str, content: &str, category: &str) -> Post {
    Post {
        id,
        title: title.into(),
        content: content.into(),
        category: category.into(),
        date: datetime!(2024-05-20 08:00 UTC),
        image_url: None,
    }
}

fn go_and_yoga() -> Vec<Post> {
    vec![
        post(1, "Go Basics", "intro to goroutines", "Technology"),
        post(2, "Yoga", "stretching routine", "Health"),
    ]
}

struct Desk {
    store: Arc<InMemoryPostStore>,
    dialogs: Arc<FakeDialogs>,
    navigator: Arc<FakeNavigator>,
    list: PostListController,
    form: PostFormController,
}

fn desk(posts: Vec<Post>, dialogs: FakeDialogs) -> Desk {
    let store = Arc::new(InMemoryPostStore::with_posts(posts).expect("unique ids"));
    let dialogs = Arc::new(dialogs);
    let navigator = Arc::new(FakeNavigator::default());
    let list = PostListController::new(
        store.clone(),
        dialogs.clone(),
        navigator.clone(),
        CategoryCatalog::default(),
    );
    let form = PostFormController::new(
        store.clone(),
        dialogs.clone(),
        navigator.clone(),
        CategoryCatalog::default(),
        Arc::new(PostIdGenerator::new()),
        1024,
    );
    Desk {
        store,
        dialogs,
        navigator,
        list,
        form,
    }
}

fn ids(posts: &[Post]) -> Vec<PostId> {
    posts.iter().map(|post| post.id).collect()
}

#[test]
fn search_is_case_insensitive_over_title_and_content() {
    let mut desk = desk(go_and_yoga(), FakeDialogs::default());

    desk.list.set_search_text("GO");
    assert_eq!(ids(&desk.list.visible_posts()), vec![1]);

    desk.list.set_search_text("stretch");
    assert_eq!(ids(&desk.list.visible_posts()), vec![2]);
}

#[test]
fn category_selection_restricts_the_list() {
    let mut desk = desk(go_and_yoga(), FakeDialogs::default());

    desk.list.set_category("Health", true).expect("known category");
    assert_eq!(ids(&desk.list.visible_posts()), vec![2]);

    desk.list.set_category("Health", false).expect("known category");
    assert_eq!(ids(&desk.list.visible_posts()), vec![1, 2]);
}

#[test]
fn filtering_twice_gives_the_same_answer() {
    let posts = go_and_yoga();
    let mut selection = CategoryCatalog::default().unselected();
    selection.insert("Technology".into(), true);

    let once = visible_posts(&posts, "o", &selection);
    let twice = visible_posts(&once, "o", &selection);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn invalid_form_is_rejected_without_touching_the_store() {
    let mut desk = desk(Vec::new(), FakeDialogs::default());
    desk.form.open(None);
    desk.form.set_title("Go");
    desk.form.set_category("Technology").expect("known category");
    desk.form.set_content("Goroutines and channels.");

    let error = desk.form.submit().await.expect_err("title too short");

    assert!(matches!(error, PostFormError::InvalidForm { .. }));
    assert!(desk.store.is_empty());
    assert_eq!(
        desk.dialogs.notices(),
        vec![(
            NoticeKind::Error,
            "Error!".to_string(),
            "Please fill in all required fields correctly.".to_string()
        )]
    );
    assert!(desk.navigator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn editing_keeps_the_id_and_returns_to_the_list() {
    let mut desk = desk(
        vec![post(7, "Old", "old content here", "Health")],
        FakeDialogs::default(),
    );

    desk.list.edit_post(7);
    assert_eq!(desk.navigator.calls.lock().unwrap().clone(), vec![Nav::Edit(7)]);

    let mode = desk.form.open(Some("7"));
    assert!(matches!(mode, FormMode::Edit { id: 7, .. }));
    desk.form.set_title("New");
    let outcome = desk.form.submit().await.expect("valid form");

    assert_eq!(outcome, SubmitOutcome::Updated(7));
    let posts = desk.store.posts().borrow().to_vec();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 7);
    assert_eq!(posts[0].title, "New");
    assert_eq!(posts[0].content, "old content here");
    assert_eq!(
        desk.dialogs.notices()[0].2,
        "Post updated successfully.".to_string()
    );
    assert_eq!(desk.navigator.calls.lock().unwrap().last(), Some(&Nav::List));
    assert!(!desk.form.is_editing());
}

#[tokio::test]
async fn created_posts_show_up_in_the_list() {
    let mut desk = desk(go_and_yoga(), FakeDialogs::default());
    desk.form.open(None);
    desk.form.set_title("Sourdough");
    desk.form.set_category("lifestyle").expect("known category");
    desk.form.set_content("Feeding a starter every day.");

    let outcome = desk.form.submit().await.expect("valid form");

    let SubmitOutcome::Created(id) = outcome else {
        panic!("expected a new post, got {outcome:?}");
    };
    assert!(id > 2);
    let visible = desk.list.visible_posts();
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[2].category, "Lifestyle");
}

#[tokio::test]
async fn cancelled_delete_leaves_the_store_alone() {
    let desk = desk(go_and_yoga(), FakeDialogs::answering(Decision::Cancelled));

    let outcome = desk.list.delete_post(2).await.expect("no store call");

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(*desk.dialogs.confirmations.lock().unwrap(), 1);
    assert_eq!(desk.store.len(), 2);
    assert!(desk.dialogs.notices().is_empty());
}

#[tokio::test]
async fn confirmed_delete_removes_the_post() {
    let desk = desk(go_and_yoga(), FakeDialogs::answering(Decision::Confirmed));

    let outcome = desk.list.delete_post(2).await.expect("post exists");

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(ids(&desk.list.visible_posts()), vec![1]);
    assert_eq!(
        desk.dialogs.notices(),
        vec![(
            NoticeKind::Success,
            "Deleted!".to_string(),
            "The post has been deleted.".to_string()
        )]
    );
}
