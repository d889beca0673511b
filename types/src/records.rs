//! Reading and writing data records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where in a shard a new iterator starts reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShardIteratorType {
    AtSequenceNumber,
    AfterSequenceNumber,
    TrimHorizon,
    Latest,
    AtTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetShardIteratorRequest {
    pub stream_name: String,
    pub shard_id: String,
    pub shard_iterator_type: ShardIteratorType,
    /// Required by the service for the `*_SEQUENCE_NUMBER` iterator types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_sequence_number: Option<String>,
    /// Required by the service for `AT_TIMESTAMP`.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

impl GetShardIteratorRequest {
    #[must_use]
    pub fn new(
        stream_name: impl Into<String>,
        shard_id: impl Into<String>,
        shard_iterator_type: ShardIteratorType,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_id: shard_id.into(),
            shard_iterator_type,
            starting_sequence_number: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_starting_sequence_number(mut self, sequence_number: impl Into<String>) -> Self {
        self.starting_sequence_number = Some(sequence_number.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetShardIteratorResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_iterator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRecordsRequest {
    pub shard_iterator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl GetRecordsRequest {
    #[must_use]
    pub fn new(shard_iterator: impl Into<String>) -> Self {
        Self {
            shard_iterator: shard_iterator.into(),
            limit: None,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub sequence_number: String,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub approximate_arrival_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "crate::blob")]
    pub data: Vec<u8>,
    pub partition_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRecordsResult {
    #[serde(default)]
    pub records: Vec<Record>,
    /// `None` once the shard has been closed and fully read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_shard_iterator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub millis_behind_latest: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordRequest {
    pub stream_name: String,
    #[serde(with = "crate::blob")]
    pub data: Vec<u8>,
    pub partition_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_hash_key: Option<String>,
    /// Guarantees strictly increasing sequence numbers for puts from the same
    /// client and partition key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number_for_ordering: Option<String>,
}

impl PutRecordRequest {
    #[must_use]
    pub fn new(
        stream_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            data: data.into(),
            partition_key: partition_key.into(),
            explicit_hash_key: None,
            sequence_number_for_ordering: None,
        }
    }

    #[must_use]
    pub fn with_sequence_number_for_ordering(mut self, sequence_number: impl Into<String>) -> Self {
        self.sequence_number_for_ordering = Some(sequence_number.into());
        self
    }

    #[must_use]
    pub fn with_explicit_hash_key(mut self, hash_key: impl Into<String>) -> Self {
        self.explicit_hash_key = Some(hash_key.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordResult {
    pub shard_id: String,
    pub sequence_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsRequestEntry {
    #[serde(with = "crate::blob")]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_hash_key: Option<String>,
    pub partition_key: String,
}

impl PutRecordsRequestEntry {
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>, partition_key: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            explicit_hash_key: None,
            partition_key: partition_key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsRequest {
    pub stream_name: String,
    pub records: Vec<PutRecordsRequestEntry>,
}

impl PutRecordsRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, records: Vec<PutRecordsRequestEntry>) -> Self {
        Self {
            stream_name: stream_name.into(),
            records,
        }
    }
}

/// Per-entry outcome of a batch put. Successful entries carry a shard and
/// sequence number; failed ones carry an error code and message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsResultEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordsResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_record_count: Option<i32>,
    pub records: Vec<PutRecordsResultEntry>,
}
