use anyhow::Context;

use gcel_core::prelude::*;
use gcel_model::Labels;

use crate::cli::Command;

/// Executes one subcommand and returns what should be printed.
pub fn run(command: &Command) -> anyhow::Result<String> {
    match command {
        Command::Encode { text } => Ok(encode(text)),
        Command::Decode { label } => Ok(decode(label)?),
        Command::Tag { cluster, role } => {
            tag_for_role(cluster, *role).with_context(|| format!("building tag for {role}"))
        }
        Command::Labels {
            cluster,
            role,
            instance_group,
        } => {
            let mut labels: Labels = [cluster_label(cluster), role_label(*role)]
                .into_iter()
                .collect();
            if let Some(ig) = instance_group {
                let (k, v) = instance_group_label(ig);
                labels.insert(k, v);
            }
            Ok(serde_json::to_string_pretty(&labels)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use gcel_model::InstanceGroupRole;

    use super::*;

    #[test]
    fn encode_and_decode() {
        let out = run(&Command::Encode {
            text: "k8s-io".into(),
        })
        .unwrap();
        assert_eq!(out, "k8s-2dio");

        let out = run(&Command::Decode { label: out }).unwrap();
        assert_eq!(out, "k8s-io");
    }

    #[test]
    fn decode_failure_is_an_error() {
        let err = run(&Command::Decode {
            label: "-zz".into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("-zz"));
    }

    #[test]
    fn tag_for_bastion() {
        let out = run(&Command::Tag {
            cluster: "prod.example.com".into(),
            role: InstanceGroupRole::Bastion,
        })
        .unwrap();
        assert_eq!(out, "prod-example-com-k8s-io-role-bastion");
    }

    #[test]
    fn labels_as_json() {
        let out = run(&Command::Labels {
            cluster: "prod.example.com".into(),
            role: InstanceGroupRole::Node,
            instance_group: Some("Nodes".into()),
        })
        .unwrap();

        let parsed: Labels = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.get("k8s-io-cluster-name"), Some("prod-example-com"));
        assert_eq!(parsed.get("k8s-io-role-node"), Some(""));
        assert_eq!(parsed.get("k8s-io-instance-group"), Some("-4eodes"));
    }
}
