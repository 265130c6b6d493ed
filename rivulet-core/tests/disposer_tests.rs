use rivulet_core::{Disposable, Disposer, Observable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Counter(Arc<AtomicUsize>);

impl Disposable for Counter {
    fn dispose(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn dispose_all_releases_everything() {
    let released = Arc::new(AtomicUsize::new(0));
    let disposer = Disposer::new();
    disposer.add(Box::new(Counter(Arc::clone(&released))));
    disposer.add(Box::new(Counter(Arc::clone(&released))));

    disposer.dispose_all();

    assert_eq!(released.load(Ordering::SeqCst), 2);
}

#[test]
fn dispose_all_is_idempotent() {
    let released = Arc::new(AtomicUsize::new(0));
    let disposer = Disposer::new();
    disposer.add(Box::new(Counter(Arc::clone(&released))));

    disposer.dispose_all();
    disposer.dispose_all();

    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_the_disposer_disposes() {
    let released = Arc::new(AtomicUsize::new(0));
    {
        let disposer = Disposer::new();
        disposer.add(Box::new(Counter(Arc::clone(&released))));
    }

    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn disposing_a_subscription_unsubscribes_it() {
    let subject: Observable<i32> = Observable::new();
    let subscription = subject.subscribe_next(|_| {});
    assert_eq!(subject.subscriber_count(), 1);

    let disposer = Disposer::new();
    disposer.add(Box::new(subscription));
    disposer.dispose_all();

    assert_eq!(subject.subscriber_count(), 0);
}

#[test]
fn retained_disposables_release_when_the_subject_drops() {
    let released = Arc::new(AtomicUsize::new(0));
    {
        let subject: Observable<i32> = Observable::new();
        subject.retain(Counter(Arc::clone(&released)));
        assert_eq!(released.load(Ordering::SeqCst), 0);
    }

    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn retained_subscription_detaches_an_upstream() {
    let upstream: Observable<i32> = Observable::new();
    {
        let downstream: Observable<i32> = Observable::new();
        let forward = upstream.subscribe_next(|_| {});
        downstream.retain(forward);
        assert_eq!(upstream.subscriber_count(), 1);
    }

    assert_eq!(upstream.subscriber_count(), 0);
}
