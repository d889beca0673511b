//! Every operation forwards its request and settles with the client's outcome.

use std::collections::BTreeMap;

use kinesis_promise::KinesisClient;
use kinesis_promise::types::{
    AddTagsToStreamRequest, AddTagsToStreamResult, CreateStreamRequest, CreateStreamResult,
    DecreaseStreamRetentionPeriodRequest, DecreaseStreamRetentionPeriodResult,
    DeleteStreamRequest, DeleteStreamResult, DescribeStreamRequest, DescribeStreamResult,
    DisableEnhancedMonitoringRequest, EnableEnhancedMonitoringRequest, EnhancedMonitoringResult,
    GetRecordsRequest, GetRecordsResult, GetShardIteratorRequest, GetShardIteratorResult,
    IncreaseStreamRetentionPeriodRequest,
    IncreaseStreamRetentionPeriodResult, ListStreamsRequest, ListStreamsResult,
    ListTagsForStreamRequest, ListTagsForStreamResult, MergeShardsRequest, MergeShardsResult,
    MetricsName, PutRecordRequest, PutRecordResult, PutRecordsRequest, PutRecordsRequestEntry,
    PutRecordsResult, PutRecordsResultEntry, Record, RemoveTagsFromStreamRequest,
    RemoveTagsFromStreamResult, ShardIteratorType, SplitShardRequest, SplitShardResult, Tag,
};

use crate::common::{Call, StubError, StubKinesis, sample_description};

fn put_records_request() -> PutRecordsRequest {
    PutRecordsRequest::new(
        "orders",
        vec![
            PutRecordsRequestEntry::new(b"a".to_vec(), "k1"),
            PutRecordsRequestEntry::new(b"b".to_vec(), "k2"),
        ],
    )
}

#[tokio::test]
async fn every_operation_fulfills_with_client_result() {
    let stub = StubKinesis::succeeding();

    let created = CreateStreamResult {
        stream_name: Some("orders".into()),
    };
    let described = DescribeStreamResult {
        stream_description: sample_description("payments"),
    };
    let monitoring = EnhancedMonitoringResult {
        stream_name: Some("orders".into()),
        current_shard_level_metrics: vec![],
        desired_shard_level_metrics: vec![MetricsName::IncomingBytes],
    };
    let records = GetRecordsResult {
        records: vec![Record {
            sequence_number: "1".into(),
            approximate_arrival_timestamp: None,
            data: b"payload".to_vec(),
            partition_key: "key1".into(),
        }],
        next_shard_iterator: Some("iter-2".into()),
        millis_behind_latest: Some(0),
    };
    let iterator = GetShardIteratorResult {
        shard_iterator: Some("iter-1".into()),
    };
    let streams = ListStreamsResult {
        stream_names: vec!["orders".into(), "payments".into()],
        has_more_streams: true,
    };
    let tags = ListTagsForStreamResult {
        tags: vec![Tag {
            key: "team".into(),
            value: Some("billing".into()),
        }],
        has_more_tags: false,
    };
    let put = PutRecordResult {
        shard_id: "shardId-000000000001".into(),
        sequence_number: "49590338271490256608559692538361571095921575989136588898".into(),
    };
    let put_batch = PutRecordsResult {
        failed_record_count: Some(1),
        records: vec![
            PutRecordsResultEntry {
                sequence_number: Some("7".into()),
                shard_id: Some("shardId-000000000000".into()),
                ..Default::default()
            },
            PutRecordsResultEntry {
                error_code: Some("ProvisionedThroughputExceededException".into()),
                error_message: Some("Rate exceeded".into()),
                ..Default::default()
            },
        ],
    };

    stub.respond_with(created.clone());
    stub.respond_with(described.clone());
    stub.respond_with(monitoring.clone());
    stub.respond_with(records.clone());
    stub.respond_with(iterator.clone());
    stub.respond_with(streams.clone());
    stub.respond_with(tags.clone());
    stub.respond_with(put.clone());
    stub.respond_with(put_batch.clone());

    let client = KinesisClient::new(stub);

    let mut new_tags = BTreeMap::new();
    new_tags.insert("team".to_string(), "billing".to_string());
    assert_eq!(
        client
            .add_tags_to_stream(AddTagsToStreamRequest::new("orders", new_tags))
            .await,
        Ok(AddTagsToStreamResult::default())
    );
    assert_eq!(
        client
            .create_stream(CreateStreamRequest::new("orders", 2))
            .await,
        Ok(created)
    );
    assert_eq!(
        client
            .decrease_stream_retention_period(DecreaseStreamRetentionPeriodRequest::new(
                "orders", 24
            ))
            .await,
        Ok(DecreaseStreamRetentionPeriodResult::default())
    );
    assert_eq!(
        client
            .delete_stream(DeleteStreamRequest::new("orders"))
            .await,
        Ok(DeleteStreamResult::default())
    );
    assert_eq!(
        client
            .describe_stream(DescribeStreamRequest::new("payments"))
            .await,
        Ok(described)
    );
    assert_eq!(
        client
            .disable_enhanced_monitoring(DisableEnhancedMonitoringRequest::new(
                "orders",
                vec![MetricsName::All]
            ))
            .await,
        Ok(monitoring.clone())
    );
    assert_eq!(
        client
            .enable_enhanced_monitoring(EnableEnhancedMonitoringRequest::new(
                "orders",
                vec![MetricsName::IncomingBytes]
            ))
            .await,
        Ok(monitoring)
    );
    assert_eq!(
        client
            .get_records(GetRecordsRequest::new("iter-1").with_limit(100))
            .await,
        Ok(records)
    );
    assert_eq!(
        client
            .get_shard_iterator(GetShardIteratorRequest::new(
                "orders",
                "shardId-000000000000",
                ShardIteratorType::TrimHorizon
            ))
            .await,
        Ok(iterator)
    );
    assert_eq!(
        client
            .increase_stream_retention_period(IncreaseStreamRetentionPeriodRequest::new(
                "orders", 48
            ))
            .await,
        Ok(IncreaseStreamRetentionPeriodResult::default())
    );
    assert_eq!(
        client.list_streams(ListStreamsRequest::new()).await,
        Ok(streams)
    );
    assert_eq!(
        client
            .list_tags_for_stream(ListTagsForStreamRequest::new("orders"))
            .await,
        Ok(tags)
    );
    assert_eq!(
        client
            .merge_shards(MergeShardsRequest::new(
                "orders",
                "shardId-000000000000",
                "shardId-000000000001"
            ))
            .await,
        Ok(MergeShardsResult::default())
    );
    assert_eq!(
        client
            .put_record(PutRecordRequest::new("orders", b"payload".to_vec(), "key1"))
            .await,
        Ok(put)
    );
    assert_eq!(
        client.put_records(put_records_request()).await,
        Ok(put_batch)
    );
    assert_eq!(
        client
            .remove_tags_from_stream(RemoveTagsFromStreamRequest::new(
                "orders",
                vec!["team".into()]
            ))
            .await,
        Ok(RemoveTagsFromStreamResult::default())
    );
    assert_eq!(
        client
            .split_shard(SplitShardRequest::new(
                "orders",
                "shardId-000000000000",
                "170141183460469231731687303715884105728"
            ))
            .await,
        Ok(SplitShardResult::default())
    );

    assert_eq!(client.inner().calls().len(), 17);
}

#[tokio::test]
async fn every_operation_rejects_with_client_error() {
    let error = StubError::ResourceNotFound("orders".into());
    let client = KinesisClient::new(StubKinesis::failing(error.clone()));
    let expected: Result<(), StubError> = Err(error);

    assert_eq!(
        client
            .add_tags_to_stream(AddTagsToStreamRequest::new("orders", BTreeMap::new()))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .create_stream(CreateStreamRequest::new("orders", 2))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .decrease_stream_retention_period(DecreaseStreamRetentionPeriodRequest::new(
                "orders", 24
            ))
            .await
            .map(drop),
        expected
    );
    assert_eq!(client.delete_stream_named("orders").await.map(drop), expected);
    assert_eq!(
        client.describe_stream_named("orders").await.map(drop),
        expected
    );
    assert_eq!(
        client
            .disable_enhanced_monitoring(DisableEnhancedMonitoringRequest::new(
                "orders",
                vec![MetricsName::All]
            ))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .enable_enhanced_monitoring(EnableEnhancedMonitoringRequest::new(
                "orders",
                vec![MetricsName::All]
            ))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .get_records(GetRecordsRequest::new("iter-1"))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .get_shard_iterator_for("orders", "shardId-000000000000", ShardIteratorType::Latest)
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .increase_stream_retention_period(IncreaseStreamRetentionPeriodRequest::new(
                "orders", 48
            ))
            .await
            .map(drop),
        expected
    );
    assert_eq!(client.list_streams_all().await.map(drop), expected);
    assert_eq!(
        client
            .list_tags_for_stream(ListTagsForStreamRequest::new("orders"))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .merge_shards_named("orders", "shardId-000000000000", "shardId-000000000001")
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .put_record_data("orders", b"payload".to_vec(), "key1")
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client.put_records(put_records_request()).await.map(drop),
        expected
    );
    assert_eq!(
        client
            .remove_tags_from_stream(RemoveTagsFromStreamRequest::new("orders", vec![]))
            .await
            .map(drop),
        expected
    );
    assert_eq!(
        client
            .split_shard_named("orders", "shardId-000000000000", "1")
            .await
            .map(drop),
        expected
    );
}

#[tokio::test]
async fn requests_reach_the_client_unchanged() {
    let client = KinesisClient::new(StubKinesis::succeeding());

    let request = PutRecordRequest::new("orders", vec![0, 159, 146, 150], "key1")
        .with_explicit_hash_key("42")
        .with_sequence_number_for_ordering("7");
    client.put_record(request.clone()).await.unwrap();

    let batch = put_records_request();
    client.put_records(batch.clone()).await.unwrap();

    assert_eq!(
        client.inner().calls(),
        vec![Call::PutRecord(request), Call::PutRecords(batch)]
    );
}

#[tokio::test]
async fn inner_client_is_reachable_after_use() {
    let client = KinesisClient::from(StubKinesis::succeeding());
    client.list_streams_all().await.unwrap();

    let stub = client.into_inner();
    assert_eq!(
        stub.calls(),
        vec![Call::ListStreams(ListStreamsRequest::default())]
    );
}
