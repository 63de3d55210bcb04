use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use dashboard::{
    ClientError, Dashboard, Mode, UsersApi,
    models::{UserForm, UserRow},
    view,
};
use reqwest::StatusCode;

#[derive(Default)]
struct FakeApi {
    rows: Mutex<Vec<UserRow>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    list_failing: AtomicBool,
    mutations_failing: AtomicBool,
}

impl FakeApi {
    fn with_rows(rows: &[(&str, &str, &str)]) -> Arc<Self> {
        let api = Self::default();
        *api.rows.lock().unwrap() = rows
            .iter()
            .map(|(id, name, email)| UserRow {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
            })
            .collect();
        Arc::new(api)
    }

    fn rows(&self) -> Vec<UserRow> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ClientError> {
        if self.mutations_failing.load(Ordering::SeqCst) {
            Err(ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UsersApi for FakeApi {
    async fn list_users(&self) -> Result<Vec<UserRow>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.list_failing.load(Ordering::SeqCst) {
            return Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(self.rows())
    }

    async fn add_user(&self, form: &UserForm) -> Result<(), ClientError> {
        self.check()?;
        if form.name.is_empty() || form.email.is_empty() {
            return Err(ClientError::Status(StatusCode::BAD_REQUEST));
        }
        let id = format!("id{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.rows.lock().unwrap().push(UserRow {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
        });
        Ok(())
    }

    async fn update_user(&self, id: &str, form: &UserForm) -> Result<(), ClientError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ClientError::Status(StatusCode::NOT_FOUND))?;
        row.name = form.name.clone();
        row.email = form.email.clone();
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(ClientError::Status(StatusCode::NOT_FOUND));
        }
        Ok(())
    }
}

async fn run(api: Arc<FakeApi>, mode: Mode, input: &str) -> String {
    let mut output = Vec::new();
    let mut dashboard = Dashboard::new(api, mode);
    dashboard.run(input.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn list_view_renders_every_record() {
    let api = FakeApi::with_rows(&[("a", "Alice", "alice@example.com"), ("b", "Bob", "bob@example.com")]);

    let output = run(api, Mode::View, "quit\n").await;

    assert!(output.contains("[1] Alice (alice@example.com)"));
    assert!(output.contains("[2] Bob (bob@example.com)"));
}

#[tokio::test]
async fn empty_store_shows_no_users() {
    let output = run(FakeApi::with_rows(&[]), Mode::View, "").await;
    assert!(output.contains(view::NO_USERS));
}

#[tokio::test]
async fn fetch_failure_renders_as_empty_list() {
    let api = FakeApi::with_rows(&[("a", "Alice", "alice@example.com")]);
    api.list_failing.store(true, Ordering::SeqCst);

    let output = run(api, Mode::View, "quit\n").await;

    assert!(output.contains(view::NO_USERS));
    assert!(!output.contains("Alice"));
}

#[tokio::test]
async fn add_view_submits_the_form() {
    let api = FakeApi::with_rows(&[]);

    let output = run(api.clone(), Mode::Add, "new\nAlice\nalice@example.com\nquit\n").await;

    assert!(output.contains(view::ADD_SUCCESS));
    let rows = api.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].email, "alice@example.com");
}

#[tokio::test]
async fn add_failure_shows_generic_indicator() {
    let api = FakeApi::with_rows(&[]);

    let output = run(api.clone(), Mode::Add, "new\n\nalice@example.com\nquit\n").await;

    assert!(output.contains(view::ADD_FAILURE));
    assert!(api.rows().is_empty());
}

#[tokio::test]
async fn update_prefills_current_values_and_refreshes_the_list() {
    let api = FakeApi::with_rows(&[("a", "A", "a@x.com")]);

    let output = run(api.clone(), Mode::View, "update 1\nB\n\nquit\n").await;

    assert!(output.contains("Name [A]: "));
    assert!(output.contains("Email [a@x.com]: "));
    assert!(output.contains(view::UPDATE_SUCCESS));
    assert_eq!(
        api.rows(),
        vec![UserRow {
            id: "a".into(),
            name: "B".into(),
            email: "a@x.com".into()
        }]
    );
    // initial render plus the re-render after the update
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    assert!(output.contains("[1] B (a@x.com)"));
}

#[tokio::test]
async fn delete_removes_the_numbered_record() {
    let api = FakeApi::with_rows(&[("a", "Alice", "alice@example.com"), ("b", "Bob", "bob@example.com")]);

    let output = run(api.clone(), Mode::View, "delete 2\nquit\n").await;

    assert!(output.contains(view::DELETE_SUCCESS));
    let ids: Vec<_> = api.rows().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["a"]);
}

#[tokio::test]
async fn failed_mutations_show_failure_indicators() {
    let api = FakeApi::with_rows(&[("a", "A", "a@x.com")]);
    api.mutations_failing.store(true, Ordering::SeqCst);

    let output = run(api.clone(), Mode::View, "update 1\nB\nb@x.com\ndelete 1\nquit\n").await;

    assert!(output.contains(view::UPDATE_FAILURE));
    assert!(output.contains(view::DELETE_FAILURE));
    assert_eq!(api.rows()[0].name, "A");
}

#[tokio::test]
async fn unknown_row_number_is_reported() {
    let api = FakeApi::with_rows(&[("a", "A", "a@x.com")]);

    let output = run(api.clone(), Mode::View, "delete 5\nquit\n").await;

    assert!(output.contains("no user numbered 5"));
    assert_eq!(api.rows().len(), 1);
}

#[tokio::test]
async fn mode_toggle_switches_views() {
    let api = FakeApi::with_rows(&[("a", "Alice", "alice@example.com")]);

    let mut dashboard = Dashboard::new(api.clone(), Mode::View);
    let mut output = Vec::new();
    dashboard
        .run("mode add\nnew\nBob\nbob@example.com\nmode view\nquit\n".as_bytes(), &mut output)
        .await
        .unwrap();

    assert_eq!(dashboard.mode(), Mode::View);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("== Add New User =="));
    assert!(output.contains("[2] Bob (bob@example.com)"));
}

#[tokio::test]
async fn row_actions_are_not_offered_in_add_view() {
    let api = FakeApi::with_rows(&[("a", "A", "a@x.com")]);

    let output = run(api.clone(), Mode::Add, "delete 1\nquit\n").await;

    assert!(output.contains(view::help(Mode::Add)));
    assert_eq!(api.rows().len(), 1);
}
