//! Combining an object name with a cluster name under a length bound.
//!
//! The result has the shape `<cluster>-<name>`, where dots in the cluster name are
//! replaced by dashes and the cluster part is truncated (with a hash suffix) when the
//! whole would exceed the bound. The object name itself is never shortened.
mod truncate;
pub use truncate::{MAX_HASH_LENGTH, TruncateOptions, hash_string, truncate_string};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LabelError, LabelResult};

/// Builds a bounded name embedding both an object name and a cluster name.
///
/// Implementations must be deterministic and return at most `max_length` bytes.
pub trait NamePrefixer {
    fn prefixed_name(&self, name: &str, cluster_name: &str, max_length: usize)
    -> LabelResult<String>;
}

/// Tuning for [`ClusterPrefixer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixOptions {
    /// Hash characters appended to a truncated cluster name.
    pub hash_length: usize,
    /// Room that must remain for the cluster part once the name suffix is placed.
    pub min_cluster_length: usize,
}

impl Default for PrefixOptions {
    fn default() -> Self {
        Self {
            hash_length: 6,
            min_cluster_length: 10,
        }
    }
}

/// Default [`NamePrefixer`]: `truncate(safe_cluster_name(cluster)) + "-" + name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterPrefixer {
    opts: PrefixOptions,
}

impl ClusterPrefixer {
    pub fn new(opts: PrefixOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &PrefixOptions {
        &self.opts
    }
}

impl NamePrefixer for ClusterPrefixer {
    fn prefixed_name(
        &self,
        name: &str,
        cluster_name: &str,
        max_length: usize,
    ) -> LabelResult<String> {
        let suffix = format!("-{name}");
        if suffix.len() + self.opts.min_cluster_length > max_length {
            debug!(name, max_length, "name leaves no room for the cluster prefix");
            return Err(LabelError::NameTooLong {
                name: name.to_string(),
                max_length,
            });
        }

        let opts = TruncateOptions {
            max_length: max_length - suffix.len(),
            hash_length: self.opts.hash_length,
            always_add_hash: false,
        };
        let prefix = truncate_string(&safe_cluster_name(cluster_name), &opts);
        Ok(prefix + &suffix)
    }
}

/// [`ClusterPrefixer`] with default options.
pub fn cluster_prefixed_name(
    name: &str,
    cluster_name: &str,
    max_length: usize,
) -> LabelResult<String> {
    ClusterPrefixer::default().prefixed_name(name, cluster_name, max_length)
}

/// Cluster name with every `.` replaced by `-`; dots are not allowed in tags or names.
pub fn safe_cluster_name(cluster_name: &str) -> String {
    cluster_name.replace('.', "-")
}
