//! Model values for the Kinesis promise facade.
//!
//! This crate contains the request and result shapes passed between callers,
//! the facade and the underlying asynchronous client. No IO, no async.
//!
//! Every request type has a family constructor (`DeleteStreamRequest::new`,
//! `PutRecordRequest::new`, ...) taking the minimal arguments the service
//! requires. The facade's convenience methods build their requests through
//! these constructors, so a request built by hand and one built by a
//! convenience method compare equal.

mod blob;
mod policy;
mod records;
mod shards;
mod stream;

pub use policy::{DoubleSettlement, ParseDoubleSettlementError};
pub use records::{
    GetRecordsRequest, GetRecordsResult, GetShardIteratorRequest, GetShardIteratorResult,
    PutRecordRequest, PutRecordResult, PutRecordsRequest, PutRecordsRequestEntry,
    PutRecordsResult, PutRecordsResultEntry, Record, ShardIteratorType,
};
pub use shards::{
    HashKeyRange, MergeShardsRequest, MergeShardsResult, SequenceNumberRange, Shard,
    SplitShardRequest, SplitShardResult,
};
pub use stream::{
    AddTagsToStreamRequest, AddTagsToStreamResult, CreateStreamRequest, CreateStreamResult,
    DecreaseStreamRetentionPeriodRequest, DecreaseStreamRetentionPeriodResult,
    DeleteStreamRequest, DeleteStreamResult, DescribeStreamRequest, DescribeStreamResult,
    DisableEnhancedMonitoringRequest, EnableEnhancedMonitoringRequest,
    EnhancedMetrics, EnhancedMonitoringResult, IncreaseStreamRetentionPeriodRequest,
    IncreaseStreamRetentionPeriodResult, ListStreamsRequest, ListStreamsResult,
    ListTagsForStreamRequest, ListTagsForStreamResult, MetricsName, RemoveTagsFromStreamRequest,
    RemoveTagsFromStreamResult, StreamDescription, StreamStatus, Tag,
};

/// Result of `DisableEnhancedMonitoring`; the service returns the same shape
/// for enabling and disabling.
pub type DisableEnhancedMonitoringResult = EnhancedMonitoringResult;

/// Result of `EnableEnhancedMonitoring`.
pub type EnableEnhancedMonitoringResult = EnhancedMonitoringResult;
