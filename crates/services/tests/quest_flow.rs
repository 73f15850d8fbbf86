use std::sync::Arc;

use quest_core::model::{Catalog, CertificateError, ProgressError, Section, TaskId};
use quest_core::time::{fixed_clock, fixed_now};
use services::{CompletionNotice, QuestError, QuestService};

fn reference_service() -> QuestService {
    QuestService::new(Arc::new(Catalog::reference())).with_clock(fixed_clock())
}

#[test]
fn full_quest_earns_certificate() {
    let mut svc = reference_service();

    let empty = svc.summary();
    assert_eq!(empty.completed_count, 0);
    assert_eq!(empty.total_count, 5);
    assert_eq!(empty.earned_points, 0);
    assert_eq!(empty.total_points, 70);

    svc.complete_task(TaskId::new(1)).unwrap();
    svc.complete_task(TaskId::new(4)).unwrap();
    let partial = svc.summary();
    assert_eq!(partial.completed_count, 2);
    assert_eq!(partial.earned_points, 30);
    assert_eq!(partial.percent(), 40);
    assert_eq!(
        svc.certificate().unwrap_err(),
        QuestError::Certificate(CertificateError::QuestIncomplete { remaining: 3 })
    );

    for id in [2, 3, 5] {
        let notice = svc.complete_task(TaskId::new(id)).unwrap();
        assert!(matches!(notice, CompletionNotice::Earned { .. }));
    }

    let done = svc.summary();
    assert!(done.is_complete());
    assert_eq!(done.earned_points, 70);

    let cert = svc.certificate().unwrap();
    assert_eq!(cert.earned_points(), 70);
    assert_eq!(cert.issued_at(), fixed_now());
    assert_eq!(cert.issued_at().date_naive(), chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap());
}

#[test]
fn unknown_task_leaves_session_untouched() {
    let mut svc = reference_service();
    svc.complete_task(TaskId::new(3)).unwrap();
    let before = svc.summary();

    let err = svc.complete_task(TaskId::new(999)).unwrap_err();
    assert_eq!(
        err,
        QuestError::Progress(ProgressError::InvalidTaskId {
            id: TaskId::new(999)
        })
    );
    assert_eq!(svc.summary(), before);
    assert!(svc.is_completed(TaskId::new(999)).is_err());
    assert_eq!(svc.is_completed(TaskId::new(3)), Ok(true));
}

#[test]
fn navigation_is_unrestricted() {
    let mut svc = reference_service();
    assert_eq!(svc.current_section(), Section::Home);
    svc.navigate(Section::Results);
    svc.navigate(Section::Tasks);
    assert_eq!(svc.current_section(), Section::Tasks);
    svc.navigate(Section::Tasks);
    assert_eq!(svc.current_section(), Section::Tasks);
}
