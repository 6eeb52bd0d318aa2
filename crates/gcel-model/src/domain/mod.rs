mod labels;
pub use labels::Labels;

mod constants;
pub use constants::{
    BASTION, CONTROL_PLANE, LABEL_CLUSTER_NAME, LABEL_ETCD_CLUSTER_PREFIX, LABEL_INSTANCE_GROUP,
    LABEL_ROLE_PREFIX, MAX_LABEL_LENGTH, NODE,
};

/// Fully qualified cluster name as written in the cluster configuration (e.g. `"prod.example.com"`).
///
/// No restriction applies; callers sanitize it before it reaches a label value.
pub type ClusterName = String;
