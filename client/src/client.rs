//! Promise-returning facade over a [`KinesisAsyncClient`].

use kinesis_promise_config::{ConfigError, KinesisPromiseConfig};
use kinesis_promise_types::{
    AddTagsToStreamRequest, AddTagsToStreamResult, CreateStreamRequest, CreateStreamResult,
    DecreaseStreamRetentionPeriodRequest, DecreaseStreamRetentionPeriodResult,
    DeleteStreamRequest, DeleteStreamResult, DescribeStreamRequest, DescribeStreamResult,
    DisableEnhancedMonitoringRequest, DisableEnhancedMonitoringResult, DoubleSettlement,
    EnableEnhancedMonitoringRequest, EnableEnhancedMonitoringResult, GetRecordsRequest,
    GetRecordsResult, GetShardIteratorRequest, GetShardIteratorResult,
    IncreaseStreamRetentionPeriodRequest, IncreaseStreamRetentionPeriodResult,
    ListStreamsRequest, ListStreamsResult, ListTagsForStreamRequest, ListTagsForStreamResult,
    MergeShardsRequest, MergeShardsResult, PutRecordRequest, PutRecordResult, PutRecordsRequest,
    PutRecordsResult, RemoveTagsFromStreamRequest, RemoveTagsFromStreamResult,
    ShardIteratorType, SplitShardRequest, SplitShardResult,
};

use crate::promise::{Promise, PromiseHandler, promise};
use crate::sdk::{Handler, KinesisAsyncClient};

/// Promise of an operation's result, rejected with the client's own error.
pub type KinesisPromise<T, C> = Promise<T, <C as KinesisAsyncClient>::Error>;

/// Wraps a callback-driven client so every operation returns a [`Promise`].
///
/// Each call issues exactly one request to the wrapped client and returns
/// before that request completes. The promise is fulfilled with the client's
/// result or rejected with the client's error, unchanged. Nothing is
/// retried, validated or defaulted here.
///
/// Methods ending in `_named`, `_page`, `_for`, `_at`, `_after`, `_data` and
/// `_ordered` are shorthands that build the full request with the request
/// type's own constructor and then behave exactly like the request-taking
/// method.
#[derive(Debug, Clone)]
pub struct KinesisClient<C> {
    inner: C,
    double_settlement: DoubleSettlement,
}

impl<C: KinesisAsyncClient> KinesisClient<C> {
    /// Wrap `inner` with the default double-settlement policy.
    pub fn new(inner: C) -> Self {
        Self::with_double_settlement(inner, DoubleSettlement::default())
    }

    pub fn with_double_settlement(inner: C, double_settlement: DoubleSettlement) -> Self {
        Self {
            inner,
            double_settlement,
        }
    }

    /// Wrap `inner` using the effective policy from `config` (env overrides
    /// included).
    pub fn from_config(inner: C, config: &KinesisPromiseConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_double_settlement(
            inner,
            config.double_settlement()?,
        ))
    }

    /// The wrapped client, for operations this facade does not cover.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    pub fn double_settlement(&self) -> DoubleSettlement {
        self.double_settlement
    }

    /// Issue one call through `issue` with a handler that settles the
    /// returned promise.
    fn dispatch<Req, Resp>(
        &self,
        operation: &'static str,
        request: Req,
        issue: impl FnOnce(&C, Req, Handler<Req, Resp, C::Error>),
    ) -> KinesisPromise<Resp, C>
    where
        Req: 'static,
        Resp: Send + 'static,
    {
        let (completer, promise) = promise(operation, self.double_settlement);
        tracing::trace!(operation, "issuing request");
        issue(
            &self.inner,
            request,
            Box::new(PromiseHandler::new(completer)),
        );
        promise
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Add or update tags on a stream.
    pub fn add_tags_to_stream(
        &self,
        request: AddTagsToStreamRequest,
    ) -> KinesisPromise<AddTagsToStreamResult, C> {
        self.dispatch("add_tags_to_stream", request, C::add_tags_to_stream_async)
    }

    pub fn list_tags_for_stream(
        &self,
        request: ListTagsForStreamRequest,
    ) -> KinesisPromise<ListTagsForStreamResult, C> {
        self.dispatch("list_tags_for_stream", request, C::list_tags_for_stream_async)
    }

    pub fn remove_tags_from_stream(
        &self,
        request: RemoveTagsFromStreamRequest,
    ) -> KinesisPromise<RemoveTagsFromStreamResult, C> {
        self.dispatch(
            "remove_tags_from_stream",
            request,
            C::remove_tags_from_stream_async,
        )
    }

    // ========================================================================
    // Stream lifecycle
    // ========================================================================

    pub fn create_stream(
        &self,
        request: CreateStreamRequest,
    ) -> KinesisPromise<CreateStreamResult, C> {
        self.dispatch("create_stream", request, C::create_stream_async)
    }

    /// Delete a stream with all its shards and data.
    pub fn delete_stream(
        &self,
        request: DeleteStreamRequest,
    ) -> KinesisPromise<DeleteStreamResult, C> {
        self.dispatch("delete_stream", request, C::delete_stream_async)
    }

    pub fn delete_stream_named(
        &self,
        stream_name: impl Into<String>,
    ) -> KinesisPromise<DeleteStreamResult, C> {
        self.delete_stream(DeleteStreamRequest::new(stream_name))
    }

    pub fn describe_stream(
        &self,
        request: DescribeStreamRequest,
    ) -> KinesisPromise<DescribeStreamResult, C> {
        self.dispatch("describe_stream", request, C::describe_stream_async)
    }

    pub fn describe_stream_named(
        &self,
        stream_name: impl Into<String>,
    ) -> KinesisPromise<DescribeStreamResult, C> {
        self.describe_stream(DescribeStreamRequest::new(stream_name))
    }

    /// Describe at most `limit` shards, starting after
    /// `exclusive_start_shard_id`.
    pub fn describe_stream_page(
        &self,
        stream_name: impl Into<String>,
        limit: i32,
        exclusive_start_shard_id: Option<String>,
    ) -> KinesisPromise<DescribeStreamResult, C> {
        self.describe_stream(DescribeStreamRequest::page(
            stream_name,
            limit,
            exclusive_start_shard_id,
        ))
    }

    /// First page of stream names, with the service's default page size.
    pub fn list_streams_all(&self) -> KinesisPromise<ListStreamsResult, C> {
        self.list_streams(ListStreamsRequest::new())
    }

    pub fn list_streams(&self, request: ListStreamsRequest) -> KinesisPromise<ListStreamsResult, C> {
        self.dispatch("list_streams", request, C::list_streams_async)
    }

    pub fn list_streams_after(
        &self,
        exclusive_start_stream_name: impl Into<String>,
    ) -> KinesisPromise<ListStreamsResult, C> {
        self.list_streams(ListStreamsRequest::after(exclusive_start_stream_name))
    }

    pub fn list_streams_page(
        &self,
        limit: i32,
        exclusive_start_stream_name: Option<String>,
    ) -> KinesisPromise<ListStreamsResult, C> {
        self.list_streams(ListStreamsRequest::page(limit, exclusive_start_stream_name))
    }

    // ========================================================================
    // Retention
    // ========================================================================

    /// Shorten how long records stay readable after they are added.
    pub fn decrease_stream_retention_period(
        &self,
        request: DecreaseStreamRetentionPeriodRequest,
    ) -> KinesisPromise<DecreaseStreamRetentionPeriodResult, C> {
        self.dispatch(
            "decrease_stream_retention_period",
            request,
            C::decrease_stream_retention_period_async,
        )
    }

    pub fn increase_stream_retention_period(
        &self,
        request: IncreaseStreamRetentionPeriodRequest,
    ) -> KinesisPromise<IncreaseStreamRetentionPeriodResult, C> {
        self.dispatch(
            "increase_stream_retention_period",
            request,
            C::increase_stream_retention_period_async,
        )
    }

    // ========================================================================
    // Enhanced monitoring
    // ========================================================================

    pub fn disable_enhanced_monitoring(
        &self,
        request: DisableEnhancedMonitoringRequest,
    ) -> KinesisPromise<DisableEnhancedMonitoringResult, C> {
        self.dispatch(
            "disable_enhanced_monitoring",
            request,
            C::disable_enhanced_monitoring_async,
        )
    }

    pub fn enable_enhanced_monitoring(
        &self,
        request: EnableEnhancedMonitoringRequest,
    ) -> KinesisPromise<EnableEnhancedMonitoringResult, C> {
        self.dispatch(
            "enable_enhanced_monitoring",
            request,
            C::enable_enhanced_monitoring_async,
        )
    }

    // ========================================================================
    // Records
    // ========================================================================

    pub fn get_records(&self, request: GetRecordsRequest) -> KinesisPromise<GetRecordsResult, C> {
        self.dispatch("get_records", request, C::get_records_async)
    }

    pub fn get_shard_iterator(
        &self,
        request: GetShardIteratorRequest,
    ) -> KinesisPromise<GetShardIteratorResult, C> {
        self.dispatch("get_shard_iterator", request, C::get_shard_iterator_async)
    }

    pub fn get_shard_iterator_for(
        &self,
        stream_name: impl Into<String>,
        shard_id: impl Into<String>,
        shard_iterator_type: ShardIteratorType,
    ) -> KinesisPromise<GetShardIteratorResult, C> {
        self.get_shard_iterator(GetShardIteratorRequest::new(
            stream_name,
            shard_id,
            shard_iterator_type,
        ))
    }

    /// Iterator positioned relative to `starting_sequence_number`; meant for
    /// the `AT_SEQUENCE_NUMBER` and `AFTER_SEQUENCE_NUMBER` types.
    pub fn get_shard_iterator_at(
        &self,
        stream_name: impl Into<String>,
        shard_id: impl Into<String>,
        shard_iterator_type: ShardIteratorType,
        starting_sequence_number: impl Into<String>,
    ) -> KinesisPromise<GetShardIteratorResult, C> {
        self.get_shard_iterator(
            GetShardIteratorRequest::new(stream_name, shard_id, shard_iterator_type)
                .with_starting_sequence_number(starting_sequence_number),
        )
    }

    pub fn put_record(&self, request: PutRecordRequest) -> KinesisPromise<PutRecordResult, C> {
        self.dispatch("put_record", request, C::put_record_async)
    }

    pub fn put_record_data(
        &self,
        stream_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        partition_key: impl Into<String>,
    ) -> KinesisPromise<PutRecordResult, C> {
        self.put_record(PutRecordRequest::new(stream_name, data, partition_key))
    }

    /// Put a record whose sequence number must be greater than
    /// `sequence_number_for_ordering`.
    pub fn put_record_ordered(
        &self,
        stream_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        partition_key: impl Into<String>,
        sequence_number_for_ordering: impl Into<String>,
    ) -> KinesisPromise<PutRecordResult, C> {
        self.put_record(
            PutRecordRequest::new(stream_name, data, partition_key)
                .with_sequence_number_for_ordering(sequence_number_for_ordering),
        )
    }

    pub fn put_records(&self, request: PutRecordsRequest) -> KinesisPromise<PutRecordsResult, C> {
        self.dispatch("put_records", request, C::put_records_async)
    }

    // ========================================================================
    // Resharding
    // ========================================================================

    pub fn merge_shards(&self, request: MergeShardsRequest) -> KinesisPromise<MergeShardsResult, C> {
        self.dispatch("merge_shards", request, C::merge_shards_async)
    }

    pub fn merge_shards_named(
        &self,
        stream_name: impl Into<String>,
        shard_to_merge: impl Into<String>,
        adjacent_shard_to_merge: impl Into<String>,
    ) -> KinesisPromise<MergeShardsResult, C> {
        self.merge_shards(MergeShardsRequest::new(
            stream_name,
            shard_to_merge,
            adjacent_shard_to_merge,
        ))
    }

    pub fn split_shard(&self, request: SplitShardRequest) -> KinesisPromise<SplitShardResult, C> {
        self.dispatch("split_shard", request, C::split_shard_async)
    }

    pub fn split_shard_named(
        &self,
        stream_name: impl Into<String>,
        shard_to_split: impl Into<String>,
        new_starting_hash_key: impl Into<String>,
    ) -> KinesisPromise<SplitShardResult, C> {
        self.split_shard(SplitShardRequest::new(
            stream_name,
            shard_to_split,
            new_starting_hash_key,
        ))
    }
}

impl<C: KinesisAsyncClient> From<C> for KinesisClient<C> {
    fn from(inner: C) -> Self {
        Self::new(inner)
    }
}
