//! Stream lifecycle, tagging, retention and monitoring operations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shards::Shard;

// ============================================================================
// Create / Delete
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStreamRequest {
    pub stream_name: String,
    pub shard_count: i32,
}

impl CreateStreamRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, shard_count: i32) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_count,
        }
    }
}

/// The service acknowledges stream creation with an empty body; the stream
/// is `CREATING` until a later describe reports `ACTIVE`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStreamResult {
    /// Name of the stream as acknowledged by the client, when it reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteStreamRequest {
    pub stream_name: String,
}

impl DeleteStreamRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteStreamResult {}

// ============================================================================
// Describe / List
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStreamRequest {
    pub stream_name: String,
    /// Maximum number of shards to return in one page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Shard ID to start after when paging through a large stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_start_shard_id: Option<String>,
}

impl DescribeStreamRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            limit: None,
            exclusive_start_shard_id: None,
        }
    }

    /// One page of shards: at most `limit`, starting after
    /// `exclusive_start_shard_id` (or from the first shard when `None`).
    #[must_use]
    pub fn page(
        stream_name: impl Into<String>,
        limit: i32,
        exclusive_start_shard_id: Option<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            limit: Some(limit),
            exclusive_start_shard_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStreamResult {
    pub stream_description: StreamDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamStatus {
    Creating,
    Deleting,
    Active,
    Updating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamDescription {
    pub stream_name: String,
    #[serde(rename = "StreamARN")]
    pub stream_arn: String,
    pub stream_status: StreamStatus,
    #[serde(default)]
    pub shards: Vec<Shard>,
    pub has_more_shards: bool,
    pub retention_period_hours: i32,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enhanced_monitoring: Vec<EnhancedMetrics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListStreamsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_start_stream_name: Option<String>,
}

impl ListStreamsRequest {
    /// The first page with the service's default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn after(exclusive_start_stream_name: impl Into<String>) -> Self {
        Self {
            limit: None,
            exclusive_start_stream_name: Some(exclusive_start_stream_name.into()),
        }
    }

    #[must_use]
    pub fn page(limit: i32, exclusive_start_stream_name: Option<String>) -> Self {
        Self {
            limit: Some(limit),
            exclusive_start_stream_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListStreamsResult {
    #[serde(default)]
    pub stream_names: Vec<String>,
    pub has_more_streams: bool,
}

// ============================================================================
// Retention
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecreaseStreamRetentionPeriodRequest {
    pub stream_name: String,
    pub retention_period_hours: i32,
}

impl DecreaseStreamRetentionPeriodRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, retention_period_hours: i32) -> Self {
        Self {
            stream_name: stream_name.into(),
            retention_period_hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecreaseStreamRetentionPeriodResult {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IncreaseStreamRetentionPeriodRequest {
    pub stream_name: String,
    pub retention_period_hours: i32,
}

impl IncreaseStreamRetentionPeriodRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, retention_period_hours: i32) -> Self {
        Self {
            stream_name: stream_name.into(),
            retention_period_hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncreaseStreamRetentionPeriodResult {}

// ============================================================================
// Enhanced Monitoring
// ============================================================================

/// Shard-level metric names accepted by the monitoring operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricsName {
    IncomingBytes,
    IncomingRecords,
    OutgoingBytes,
    OutgoingRecords,
    WriteProvisionedThroughputExceeded,
    ReadProvisionedThroughputExceeded,
    IteratorAgeMilliseconds,
    #[serde(rename = "ALL")]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnhancedMetrics {
    #[serde(default)]
    pub shard_level_metrics: Vec<MetricsName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableEnhancedMonitoringRequest {
    pub stream_name: String,
    pub shard_level_metrics: Vec<MetricsName>,
}

impl EnableEnhancedMonitoringRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, shard_level_metrics: Vec<MetricsName>) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_level_metrics,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableEnhancedMonitoringRequest {
    pub stream_name: String,
    pub shard_level_metrics: Vec<MetricsName>,
}

impl DisableEnhancedMonitoringRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, shard_level_metrics: Vec<MetricsName>) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_level_metrics,
        }
    }
}

/// Metric sets before and after an enable/disable call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnhancedMonitoringResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    #[serde(default)]
    pub current_shard_level_metrics: Vec<MetricsName>,
    #[serde(default)]
    pub desired_shard_level_metrics: Vec<MetricsName>,
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToStreamRequest {
    pub stream_name: String,
    pub tags: BTreeMap<String, String>,
}

impl AddTagsToStreamRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, tags: BTreeMap<String, String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddTagsToStreamResult {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForStreamRequest {
    pub stream_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_start_tag_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ListTagsForStreamRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            exclusive_start_tag_key: None,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForStreamResult {
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub has_more_tags: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsFromStreamRequest {
    pub stream_name: String,
    pub tag_keys: Vec<String>,
}

impl RemoveTagsFromStreamRequest {
    #[must_use]
    pub fn new(stream_name: impl Into<String>, tag_keys: Vec<String>) -> Self {
        Self {
            stream_name: stream_name.into(),
            tag_keys,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoveTagsFromStreamResult {}
