pub mod codec;
pub mod error;
pub mod labels;
pub mod naming;
pub mod tag;

pub mod prelude {
    pub use crate::codec::{decode, decode_bytes, encode, encode_bytes};
    pub use crate::error::{LabelError, LabelResult};
    pub use crate::labels::{
        cluster_label, decoded_label, etcd_cluster_label, instance_group_label, role_label,
    };
    pub use crate::naming::{
        ClusterPrefixer, NamePrefixer, PrefixOptions, cluster_prefixed_name, safe_cluster_name,
    };
    pub use crate::tag::{tag_for_role, tag_for_role_with};
}
