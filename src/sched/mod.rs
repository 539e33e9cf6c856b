//! The three scheduler implementations: FIFO, partitioned round-robin, and
//! resource-managed admission control.

pub mod fifo;
pub mod managed;
pub mod partitioned;

pub use fifo::FifoScheduler;
pub use managed::ResourceManagedScheduler;
pub use partitioned::PartitionedScheduler;
