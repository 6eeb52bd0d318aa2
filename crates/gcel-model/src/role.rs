use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{BASTION, CONTROL_PLANE, NODE};
use crate::error::{ModelError, ModelResult};

/// Role an instance group plays in the cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceGroupRole {
    /// Hosts the Kubernetes control plane (formerly "master").
    ControlPlane,
    /// Hosts the API server only.
    #[serde(rename = "APIServer")]
    ApiServer,
    /// Regular worker node.
    Node,
    /// SSH jump host.
    Bastion,
}

impl InstanceGroupRole {
    /// All known roles.
    pub const ALL: [InstanceGroupRole; 4] = [
        InstanceGroupRole::ControlPlane,
        InstanceGroupRole::ApiServer,
        InstanceGroupRole::Node,
        InstanceGroupRole::Bastion,
    ];

    /// Canonical lowercase form, used in label keys and network tags.
    pub fn to_lower_string(&self) -> &'static str {
        match self {
            InstanceGroupRole::ControlPlane => CONTROL_PLANE,
            InstanceGroupRole::ApiServer => "apiserver",
            InstanceGroupRole::Node => NODE,
            InstanceGroupRole::Bastion => BASTION,
        }
    }
}

impl Default for InstanceGroupRole {
    fn default() -> Self {
        InstanceGroupRole::Node
    }
}

impl fmt::Display for InstanceGroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_lower_string())
    }
}

impl FromStr for InstanceGroupRole {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "control-plane" | "controlplane" | "master" => Ok(InstanceGroupRole::ControlPlane),
            "apiserver" | "api-server" => Ok(InstanceGroupRole::ApiServer),
            "node" => Ok(InstanceGroupRole::Node),
            "bastion" => Ok(InstanceGroupRole::Bastion),
            other => Err(ModelError::UnknownRole(other.to_string())),
        }
    }
}
