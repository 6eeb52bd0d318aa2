use clap::{Parser, Subcommand};

use gcel_model::InstanceGroupRole;
use gcel_observe::{LoggerFormat, LoggerLevel};

/// Encode and decode RFC1035 label values, and build cluster role tags.
#[derive(Debug, Parser)]
#[command(name = "gcel-ctl", version)]
pub struct Cli {
    /// Log output format: text, json or journald.
    #[arg(long, global = true, env = "GCEL_LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,

    /// Log filter directive, e.g. "debug" or "gcel_core=trace,warn".
    #[arg(long, global = true, env = "GCEL_LOG_LEVEL", default_value = "warn")]
    pub log_level: LoggerLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Escape arbitrary text into a label value.
    Encode { text: String },

    /// Recover the original text from a label value.
    Decode { label: String },

    /// Print the network tag for a role in a cluster.
    Tag {
        #[arg(long)]
        cluster: String,
        #[arg(long)]
        role: InstanceGroupRole,
    },

    /// Print the labels an instance of the given role would carry, as JSON.
    Labels {
        #[arg(long)]
        cluster: String,
        #[arg(long)]
        role: InstanceGroupRole,
        #[arg(long)]
        instance_group: Option<String>,
    },
}
