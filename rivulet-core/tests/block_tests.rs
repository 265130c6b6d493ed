use rivulet_core::{Observable, RivuletError};

#[tokio::test]
async fn block_returns_the_first_value() {
    let subject = Observable::new();
    let producer = subject.clone();
    tokio::spawn(async move {
        producer.next(5);
        producer.next(6);
    });

    let result = subject.block().await;

    assert_eq!(result.value, Some(5));
    assert!(result.error.is_none());
}

#[tokio::test]
async fn block_returns_the_error() {
    let subject: Observable<i32> = Observable::new();
    let producer = subject.clone();
    tokio::spawn(async move {
        producer.error(RivuletError::processing_error("boom"));
    });

    let result = subject.block().await;

    assert!(result.value.is_none());
    assert!(matches!(
        result.error,
        Some(RivuletError::ProcessingError { .. })
    ));
}

#[tokio::test]
async fn block_on_completion_returns_neither_value_nor_error() {
    let subject: Observable<i32> = Observable::new();
    let producer = subject.clone();
    tokio::spawn(async move {
        producer.done();
    });

    let result = subject.block().await;

    assert!(result.value.is_none());
    assert!(result.error.is_none());
}

#[tokio::test]
async fn block_on_terminated_subject_returns_immediately() {
    let subject: Observable<i32> = Observable::new();
    subject.error(RivuletError::processing_error("long gone"));

    let result = subject.block().await;

    assert!(matches!(
        result.error,
        Some(RivuletError::ProcessingError { .. })
    ));
}

#[tokio::test]
async fn block_unsubscribes_once_resolved() {
    let subject = Observable::new();
    let producer = subject.clone();
    tokio::spawn(async move {
        producer.next(1);
    });

    let result = subject.block().await;

    assert_eq!(result.value, Some(1));
    assert_eq!(subject.subscriber_count(), 0);
    assert!(!subject.is_terminated());
}
