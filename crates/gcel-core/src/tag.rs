//! Network tags identifying the instances of one role in one cluster.
use gcel_model::{InstanceGroupRole, LABEL_ROLE_PREFIX, MAX_LABEL_LENGTH};
use tracing::debug;

use crate::error::LabelResult;
use crate::naming::{ClusterPrefixer, NamePrefixer};

/// Returns the instance (network) tag used for instances with the given role.
///
/// The tag is `k8s-io-role-<role>` prefixed with the cluster name and bounded to
/// [`MAX_LABEL_LENGTH`] by the default [`ClusterPrefixer`].
///
/// # Examples
/// ```
/// use gcel_core::tag::tag_for_role;
/// use gcel_model::InstanceGroupRole;
///
/// let tag = tag_for_role("prod.example.com", InstanceGroupRole::Node).unwrap();
/// assert_eq!(tag, "prod-example-com-k8s-io-role-node");
/// ```
pub fn tag_for_role(cluster_name: &str, role: InstanceGroupRole) -> LabelResult<String> {
    tag_for_role_with(&ClusterPrefixer::default(), cluster_name, role)
}

/// Same as [`tag_for_role`] with a caller-supplied prefixing policy.
///
/// Errors from `prefixer` are returned unchanged.
pub fn tag_for_role_with<P>(
    prefixer: &P,
    cluster_name: &str,
    role: InstanceGroupRole,
) -> LabelResult<String>
where
    P: NamePrefixer + ?Sized,
{
    let name = format!("{LABEL_ROLE_PREFIX}{}", role.to_lower_string());
    let tag = prefixer.prefixed_name(&name, cluster_name, MAX_LABEL_LENGTH)?;
    debug!(cluster_name, %role, %tag, "built role tag");
    Ok(tag)
}
