//! Shard layout and resharding operations.

use serde::{Deserialize, Serialize};

/// Inclusive range of 128-bit hash keys, as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HashKeyRange {
    pub starting_hash_key: String,
    pub ending_hash_key: String,
}

/// Open shards have no ending sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceNumberRange {
    pub starting_sequence_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_sequence_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shard {
    pub shard_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacent_parent_shard_id: Option<String>,
    pub hash_key_range: HashKeyRange,
    pub sequence_number_range: SequenceNumberRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MergeShardsRequest {
    pub stream_name: String,
    pub shard_to_merge: String,
    pub adjacent_shard_to_merge: String,
}

impl MergeShardsRequest {
    #[must_use]
    pub fn new(
        stream_name: impl Into<String>,
        shard_to_merge: impl Into<String>,
        adjacent_shard_to_merge: impl Into<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_to_merge: shard_to_merge.into(),
            adjacent_shard_to_merge: adjacent_shard_to_merge.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MergeShardsResult {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SplitShardRequest {
    pub stream_name: String,
    pub shard_to_split: String,
    pub new_starting_hash_key: String,
}

impl SplitShardRequest {
    #[must_use]
    pub fn new(
        stream_name: impl Into<String>,
        shard_to_split: impl Into<String>,
        new_starting_hash_key: impl Into<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            shard_to_split: shard_to_split.into(),
            new_starting_hash_key: new_starting_hash_key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitShardResult {}
