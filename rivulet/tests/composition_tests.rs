// Copyright 2026 the rivulet authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet::prelude::*;
use rivulet_test_utils::helpers::{drain, recv_timeout};
use rivulet_test_utils::test_data::{
    person_alice, person_bob, person_carol, person_dana, TestData,
};
use rivulet_test_utils::value_channel;
use std::time::Duration;
use tokio::time::pause;

#[test]
fn test_composition_skip_twice() {
    // Arrange
    let source = Observable::new();
    let tail = source.skip(1).skip(1);
    let (callbacks, mut rx) = value_channel();
    let _subscription = tail.subscribe(callbacks);

    // Act
    source.next(person_alice());
    source.next(person_bob());
    source.next(person_carol());
    source.next(person_dana());

    // Assert
    assert_eq!(drain(&mut rx), vec![person_carol(), person_dana()]);
}

#[tokio::test]
async fn test_composition_skip_then_throttle() -> anyhow::Result<()> {
    // Arrange
    pause();
    let source = Observable::new();
    let calmed = source.skip(1).throttle(Duration::from_millis(100));
    let (callbacks, mut rx) = value_channel();
    let _subscription = calmed.subscribe(callbacks);

    // Act - the first value is skipped, the rest race within one period
    source.next(person_alice());
    source.next(person_bob());
    source.next(person_carol());

    // Assert - the period closes on the latest surviving value
    assert_eq!(recv_timeout(&mut rx, 150).await, Some(person_carol()));

    Ok(())
}

#[tokio::test]
async fn test_composition_debounce_then_block() -> anyhow::Result<()> {
    // Arrange
    pause();
    let source: Observable<TestData> = Observable::new();
    let settled = source.debounce(Duration::from_millis(50));
    let producer = {
        let source = source.clone();
        tokio::spawn(async move {
            source.next(person_alice());
            source.next(person_bob());
        })
    };

    // Act
    let result = settled.block().await;
    producer.await?;

    // Assert - blocking resolves on the debounced value, not the raw burst
    assert_eq!(result.value, Some(person_bob()));
    assert!(result.error.is_none());

    Ok(())
}

#[tokio::test]
async fn test_composition_variable_feeds_throttle() -> anyhow::Result<()> {
    // Arrange
    pause();
    let variable = Variable::new(person_alice());
    let calmed = variable.as_observable().throttle(Duration::from_millis(100));
    let (callbacks, mut rx) = value_channel();
    let _subscription = calmed.subscribe(callbacks);

    // Act - only sets reach the operator; there is no initial replay here
    variable.set(person_bob());
    variable.set(person_carol());

    // Assert
    assert_eq!(recv_timeout(&mut rx, 150).await, Some(person_carol()));
    assert_eq!(variable.get(), person_carol());

    Ok(())
}

#[test]
fn test_composition_unique_feeds_skip() {
    // Arrange
    let unique = Unique::new(person_alice());
    let tail = unique.as_observable().skip(1);
    let (callbacks, mut rx) = value_channel();
    let _subscription = tail.subscribe(callbacks);

    // Act - the duplicate write never reaches the chain
    unique.set(person_bob());
    unique.set(person_bob());
    unique.set(person_carol());
    unique.set(person_dana());

    // Assert
    assert_eq!(drain(&mut rx), vec![person_carol(), person_dana()]);
}

#[test]
fn test_composition_dropping_the_chain_detaches_the_source() {
    // Arrange
    let source: Observable<TestData> = Observable::new();
    let tail = source.skip(1).skip(1);
    assert_eq!(source.subscriber_count(), 1);

    // Act
    drop(tail);

    // Assert
    assert_eq!(source.subscriber_count(), 0);
}
