//! Well-known labels attached to cluster resources.
//!
//! Each helper returns a `(key, value)` pair ready to be inserted into [`Labels`].
//! Free-form inputs pass through the label codec; cluster names only have their
//! dots replaced so they stay readable.
use gcel_model::{
    InstanceGroupRole, LABEL_CLUSTER_NAME, LABEL_ETCD_CLUSTER_PREFIX, LABEL_INSTANCE_GROUP,
    LABEL_ROLE_PREFIX, Labels,
};

use crate::codec::{decode, encode};
use crate::error::LabelResult;
use crate::naming::safe_cluster_name;

/// Label marking a resource as belonging to `cluster_name`.
pub fn cluster_label(cluster_name: &str) -> (String, String) {
    (LABEL_CLUSTER_NAME.to_string(), safe_cluster_name(cluster_name))
}

/// Presence label for a role; the key carries the information, the value is empty.
pub fn role_label(role: InstanceGroupRole) -> (String, String) {
    (
        format!("{LABEL_ROLE_PREFIX}{}", role.to_lower_string()),
        String::new(),
    )
}

pub fn instance_group_label(instance_group: &str) -> (String, String) {
    (LABEL_INSTANCE_GROUP.to_string(), encode(instance_group))
}

/// Label attaching a volume to an etcd cluster, with the member spec as value.
pub fn etcd_cluster_label(etcd_cluster: &str, member: &str) -> (String, String) {
    (
        format!("{LABEL_ETCD_CLUSTER_PREFIX}{}", encode(etcd_cluster)),
        encode(member),
    )
}

/// Looks up `key` and decodes its value.
///
/// `Ok(None)` when the key is absent; an error when the stored value is not a valid
/// encoded label.
pub fn decoded_label(labels: &Labels, key: &str) -> LabelResult<Option<String>> {
    labels.get(key).map(decode).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelError;

    #[test]
    fn cluster_label_uses_safe_name() {
        assert_eq!(
            cluster_label("prod.example.com"),
            (
                "k8s-io-cluster-name".to_string(),
                "prod-example-com".to_string()
            )
        );
    }

    #[test]
    fn role_label_is_presence_only() {
        assert_eq!(
            role_label(InstanceGroupRole::ControlPlane),
            ("k8s-io-role-control-plane".to_string(), String::new())
        );
    }

    #[test]
    fn etcd_label_encodes_both_parts() {
        let (key, value) = etcd_cluster_label("main", "a/vol-1");
        assert_eq!(key, "k8s-io-etcd-main");
        assert_eq!(value, "a-2fvol-2d1");
    }

    #[test]
    fn instance_groups_roundtrip_through_labels() {
        let mut labels = Labels::new();
        let (k, v) = cluster_label("prod.example.com");
        labels.insert(k, v);
        let (k, v) = role_label(InstanceGroupRole::Node);
        labels.insert(k, v);
        let (k, v) = instance_group_label("Nodes-US_East1");
        labels.insert(k, v);

        assert_eq!(labels.get(LABEL_INSTANCE_GROUP), Some("-4eodes-2d-55-53-5f-45ast1"));
        assert_eq!(
            decoded_label(&labels, LABEL_INSTANCE_GROUP).unwrap().as_deref(),
            Some("Nodes-US_East1")
        );
        assert!(labels.contains_key("k8s-io-role-node"));
    }

    #[test]
    fn decoded_label_handles_missing_and_corrupt_values() {
        let mut labels = Labels::new();
        labels.insert(LABEL_INSTANCE_GROUP, "-zz");

        assert!(decoded_label(&labels, "absent").unwrap().is_none());
        assert!(matches!(
            decoded_label(&labels, LABEL_INSTANCE_GROUP),
            Err(LabelError::Decode { .. })
        ));
    }
}
