//! Resource vector pool behavior: grants, denials, one-shot release, and
//! conservation under concurrent use.

use std::sync::Arc;
use std::thread;

use taskweave::{ResourceRequest, ResourceVectorPool};

#[test]
fn request_and_return_round_trip() {
    let pool = ResourceVectorPool::new(vec![1, 2]);

    // a zero request is granted and costs nothing
    let zero = pool.request(&ResourceRequest::new(vec![0, 0]));
    assert!(zero.is_some());
    assert_eq!(pool.available(), vec![1, 2]);

    // over-demand on any component is a denial
    assert!(pool.request(&ResourceRequest::new(vec![2, 0])).is_none());
    assert_eq!(pool.available(), vec![1, 2]);

    let mut lease = pool.request(&ResourceRequest::new(vec![1, 0])).unwrap();
    assert_eq!(pool.available(), vec![0, 2]);

    // a request of the wrong length is a denial
    assert!(pool.request(&ResourceRequest::new(vec![1])).is_none());
    assert_eq!(pool.available(), vec![0, 2]);

    assert!(lease.release());
    assert_eq!(pool.available(), vec![1, 2]);

    // release is one-shot
    assert!(!lease.release());
    assert_eq!(pool.available(), vec![1, 2]);
}

#[test]
fn outstanding_grants_plus_available_equals_capacity() {
    let capacity = vec![5, 3];
    let pool = ResourceVectorPool::new(capacity.clone());

    let grants = [vec![2, 1], vec![1, 1], vec![2, 0]];
    let mut leases = Vec::new();
    for amounts in &grants {
        leases.push(pool.request(&ResourceRequest::new(amounts.clone())).unwrap());
        let outstanding: Vec<u32> = leases
            .iter()
            .fold(vec![0, 0], |acc, lease| {
                acc.iter()
                    .zip(lease.amounts())
                    .map(|(a, b)| a + b)
                    .collect()
            });
        let total: Vec<u32> = pool
            .available()
            .iter()
            .zip(outstanding.iter())
            .map(|(a, b)| a + b)
            .collect();
        assert_eq!(total, capacity);
    }

    // everything is leased out; the next request is denied
    assert!(pool.request(&ResourceRequest::new(vec![1, 1])).is_none());

    for mut lease in leases {
        assert!(lease.release());
    }
    assert_eq!(pool.available(), capacity);
}

#[test]
fn concurrent_request_release_conserves_capacity() {
    let pool = ResourceVectorPool::new(vec![4]);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = Arc::clone(&pool);
        handles.push(thread::spawn(move || {
            let mut granted = 0;
            for _ in 0..1000 {
                if let Some(lease) = pool.request(&ResourceRequest::new(vec![1])) {
                    granted += 1;
                    drop(lease);
                }
            }
            granted
        }));
    }

    let mut total_granted = 0;
    for handle in handles {
        total_granted += handle.join().unwrap();
    }

    assert!(total_granted > 0);
    assert_eq!(pool.available(), vec![4]);
}
