//! Well-known label keys and role identifiers.
//!
//! Every key here is already a valid RFC1035 label, so it can be attached to cloud
//! resources without passing through the label codec.

/// Label key that differentiates logically independent clusters running in the same region.
pub const LABEL_CLUSTER_NAME: &str = "k8s-io-cluster-name";

/// Label key holding the (encoded) name of the instance group an instance belongs to.
pub const LABEL_INSTANCE_GROUP: &str = "k8s-io-instance-group";

/// Prefix of the per-role label key, followed by the role's lowercase form.
///
/// Also used as the prefix of network tags built for a role.
pub const LABEL_ROLE_PREFIX: &str = "k8s-io-role-";

/// Prefix of the per-etcd-cluster label key, followed by the encoded etcd cluster name.
pub const LABEL_ETCD_CLUSTER_PREFIX: &str = "k8s-io-etcd-";

/// Role identifier for control-plane instances.
pub const CONTROL_PLANE: &str = "control-plane";

/// Role identifier for bastion instances.
pub const BASTION: &str = "bastion";

/// Role identifier for worker nodes.
pub const NODE: &str = "node";

/// Upper bound for a label value or a network tag.
pub const MAX_LABEL_LENGTH: usize = 63;
