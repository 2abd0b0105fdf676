use super::*;
use crate::app::fakes::{
    course, loading, CreateReply, FakeApi, ListReply, RecordingView, ViewEvent,
};

fn page(api: FakeApi) -> CoursePage<FakeApi, RecordingView> {
    CoursePage::new(api, RecordingView::default())
}

#[tokio::test]
async fn list_renders_once_and_succeeds() {
    let page = page(FakeApi::listing(vec![course(1, "Rust")]));

    let report = run(&page, Some(Command::List), &b""[..]).await.expect("run");

    assert_eq!(report.list, Some(ListState::Courses(vec![course(1, "Rust")])));
    assert!(!report.failed());
    assert_eq!(page.api().list_calls.get(), 1);
}

#[tokio::test]
async fn list_fails_when_the_courses_cannot_be_loaded() {
    let page = page(FakeApi::new(vec![ListReply::Status(500)], CreateReply::Created(None)));

    let report = run(&page, Some(Command::List), &b""[..]).await.expect("run");

    assert_eq!(report.list, Some(ListState::Failed(500)));
    assert!(report.failed());
}

#[tokio::test]
async fn add_refreshes_the_list_on_success() {
    let api = FakeApi::new(
        vec![ListReply::Courses(vec![course(7, "Физика")])],
        CreateReply::Created(Some(course(7, "Физика"))),
    );
    let page = page(api);

    let command = Command::Add {
        title: " Физика ".to_string(),
    };
    let report = run(&page, Some(command), &b""[..]).await.expect("run");

    assert_eq!(
        report.last_submission,
        Some(SubmitOutcome::Created(Some(course(7, "Физика"))))
    );
    assert!(!report.failed());
    assert_eq!(page.api().list_calls.get(), 1);
    assert_eq!(
        page.view().events(),
        vec![
            ViewEvent::Reset,
            loading(),
            ViewEvent::List(vec!["[7] Физика".to_string()]),
        ]
    );
}

#[tokio::test]
async fn add_with_blank_title_sends_nothing() {
    let page = page(FakeApi::listing(Vec::new()));

    let command = Command::Add {
        title: "   ".to_string(),
    };
    let report = run(&page, Some(command), &b""[..]).await.expect("run");

    assert_eq!(report, RunReport::default());
    assert!(!report.failed());
    assert!(page.api().created_titles.borrow().is_empty());
    assert_eq!(page.api().list_calls.get(), 0);
}

#[tokio::test]
async fn interactive_submits_every_line_until_eof() {
    let page = page(FakeApi::listing(Vec::new()));

    let report = run(&page, None, &b"Rust\n\n  Go  \nSQL"[..])
        .await
        .expect("run");

    assert_eq!(
        *page.api().created_titles.borrow(),
        vec!["Rust".to_string(), "Go".to_string(), "SQL".to_string()]
    );
    // the initial render plus one refresh per created course
    assert_eq!(page.api().list_calls.get(), 4);
    assert!(!report.failed());
}

#[tokio::test]
async fn interactive_rejection_is_not_hidden_by_a_trailing_blank_line() {
    let page = page(FakeApi::new(
        Vec::new(),
        CreateReply::Status(403, Some("forbidden")),
    ));

    let report = run(&page, None, &b"Physics\n\n   \n"[..])
        .await
        .expect("run");

    assert_eq!(
        report.last_submission,
        Some(SubmitOutcome::Rejected(
            "Не удалось добавить: forbidden".to_string()
        ))
    );
    assert!(report.failed());
    assert_eq!(*page.api().created_titles.borrow(), vec!["Physics".to_string()]);
}

#[tokio::test]
async fn interactive_without_input_only_renders() {
    let page = page(FakeApi::listing(vec![course(1, "Rust")]));

    let report = run(&page, None, &b""[..]).await.expect("run");

    assert_eq!(report, RunReport::default());
    assert_eq!(
        page.view().last_list(),
        Some(vec!["[1] Rust".to_string()])
    );
}
