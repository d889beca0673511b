//! The boundary with the underlying asynchronous client.
//!
//! [`KinesisAsyncClient`] models a callback-driven SDK: every operation takes
//! a request and a completion handler, returns immediately, and later calls
//! exactly one of the handler's entry points from whatever thread the SDK
//! completes on. Transport, signing, retries and pagination all live behind
//! this trait.

use kinesis_promise_types::{
    AddTagsToStreamRequest, AddTagsToStreamResult, CreateStreamRequest, CreateStreamResult,
    DecreaseStreamRetentionPeriodRequest, DecreaseStreamRetentionPeriodResult,
    DeleteStreamRequest, DeleteStreamResult, DescribeStreamRequest, DescribeStreamResult,
    DisableEnhancedMonitoringRequest, DisableEnhancedMonitoringResult,
    EnableEnhancedMonitoringRequest, EnableEnhancedMonitoringResult, GetRecordsRequest,
    GetRecordsResult, GetShardIteratorRequest, GetShardIteratorResult,
    IncreaseStreamRetentionPeriodRequest, IncreaseStreamRetentionPeriodResult,
    ListStreamsRequest, ListStreamsResult, ListTagsForStreamRequest, ListTagsForStreamResult,
    MergeShardsRequest, MergeShardsResult, PutRecordRequest, PutRecordResult, PutRecordsRequest,
    PutRecordsResult, RemoveTagsFromStreamRequest, RemoveTagsFromStreamResult, SplitShardRequest,
    SplitShardResult,
};

/// Completion callback pair for one asynchronous call.
///
/// The SDK contract is that exactly one entry point is invoked, once. Both
/// take `&self`, so nothing in the type system stops an SDK from breaking
/// that contract; implementations must cope with repeated or mixed calls.
pub trait AsyncHandler<Req, Resp, E>: Send + Sync {
    /// The call succeeded. `request` is the request the call was issued with.
    fn on_success(&self, request: Req, response: Resp);

    fn on_error(&self, error: E);
}

pub type Handler<Req, Resp, E> = Box<dyn AsyncHandler<Req, Resp, E>>;

/// A callback-driven Kinesis client.
///
/// Methods must not block waiting for the service. Failures are reported
/// through `on_error`; a method may still panic on a request it cannot
/// issue at all.
pub trait KinesisAsyncClient: Send + Sync {
    /// Failure value delivered to `on_error`.
    type Error: Send + 'static;

    fn add_tags_to_stream_async(
        &self,
        request: AddTagsToStreamRequest,
        handler: Handler<AddTagsToStreamRequest, AddTagsToStreamResult, Self::Error>,
    );

    fn create_stream_async(
        &self,
        request: CreateStreamRequest,
        handler: Handler<CreateStreamRequest, CreateStreamResult, Self::Error>,
    );

    fn decrease_stream_retention_period_async(
        &self,
        request: DecreaseStreamRetentionPeriodRequest,
        handler: Handler<
            DecreaseStreamRetentionPeriodRequest,
            DecreaseStreamRetentionPeriodResult,
            Self::Error,
        >,
    );

    fn delete_stream_async(
        &self,
        request: DeleteStreamRequest,
        handler: Handler<DeleteStreamRequest, DeleteStreamResult, Self::Error>,
    );

    fn describe_stream_async(
        &self,
        request: DescribeStreamRequest,
        handler: Handler<DescribeStreamRequest, DescribeStreamResult, Self::Error>,
    );

    fn disable_enhanced_monitoring_async(
        &self,
        request: DisableEnhancedMonitoringRequest,
        handler: Handler<
            DisableEnhancedMonitoringRequest,
            DisableEnhancedMonitoringResult,
            Self::Error,
        >,
    );

    fn enable_enhanced_monitoring_async(
        &self,
        request: EnableEnhancedMonitoringRequest,
        handler: Handler<EnableEnhancedMonitoringRequest, EnableEnhancedMonitoringResult, Self::Error>,
    );

    fn get_records_async(
        &self,
        request: GetRecordsRequest,
        handler: Handler<GetRecordsRequest, GetRecordsResult, Self::Error>,
    );

    fn get_shard_iterator_async(
        &self,
        request: GetShardIteratorRequest,
        handler: Handler<GetShardIteratorRequest, GetShardIteratorResult, Self::Error>,
    );

    fn increase_stream_retention_period_async(
        &self,
        request: IncreaseStreamRetentionPeriodRequest,
        handler: Handler<
            IncreaseStreamRetentionPeriodRequest,
            IncreaseStreamRetentionPeriodResult,
            Self::Error,
        >,
    );

    fn list_streams_async(
        &self,
        request: ListStreamsRequest,
        handler: Handler<ListStreamsRequest, ListStreamsResult, Self::Error>,
    );

    fn list_tags_for_stream_async(
        &self,
        request: ListTagsForStreamRequest,
        handler: Handler<ListTagsForStreamRequest, ListTagsForStreamResult, Self::Error>,
    );

    fn merge_shards_async(
        &self,
        request: MergeShardsRequest,
        handler: Handler<MergeShardsRequest, MergeShardsResult, Self::Error>,
    );

    fn put_record_async(
        &self,
        request: PutRecordRequest,
        handler: Handler<PutRecordRequest, PutRecordResult, Self::Error>,
    );

    fn put_records_async(
        &self,
        request: PutRecordsRequest,
        handler: Handler<PutRecordsRequest, PutRecordsResult, Self::Error>,
    );

    fn remove_tags_from_stream_async(
        &self,
        request: RemoveTagsFromStreamRequest,
        handler: Handler<RemoveTagsFromStreamRequest, RemoveTagsFromStreamResult, Self::Error>,
    );

    fn split_shard_async(
        &self,
        request: SplitShardRequest,
        handler: Handler<SplitShardRequest, SplitShardResult, Self::Error>,
    );
}
