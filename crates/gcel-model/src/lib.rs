mod domain;
pub use domain::{
    BASTION, CONTROL_PLANE, LABEL_CLUSTER_NAME, LABEL_ETCD_CLUSTER_PREFIX, LABEL_INSTANCE_GROUP,
    LABEL_ROLE_PREFIX, MAX_LABEL_LENGTH, NODE,
};
pub use domain::{ClusterName, Labels};

mod error;
pub use error::{ModelError, ModelResult};

mod role;
pub use role::InstanceGroupRole;
