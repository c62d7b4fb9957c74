use sweepr_common::network::spec::RangeSpec;

use super::OutputMode;
use crate::terminal::print;

/// Lists the candidate hosts of `target` without sending anything.
pub fn hosts(target: &RangeSpec, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let hosts: Vec<String> = target.hosts().to_iter().map(|ip| ip.to_string()).collect();
            println!("{}", serde_json::to_string_pretty(&hosts)?);
        }
        OutputMode::Quiet => target.hosts().to_iter().for_each(|ip| println!("{ip}")),
        OutputMode::Pretty => {
            let hosts = target.hosts();
            print::header("range details");
            print::aligned_line("Network", target.to_string());
            print::aligned_line("Addresses", target.num_addresses().to_string());
            print::aligned_line("Candidates", hosts.len().to_string());
            if !hosts.is_empty() {
                print::aligned_line("First", hosts.start_addr.to_string());
                print::aligned_line("Last", hosts.end_addr.to_string());
            }
            print::fat_separator();
        }
    }
    Ok(())
}
