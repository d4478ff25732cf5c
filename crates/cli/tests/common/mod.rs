#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const HEADER: &str =
    "Tier,Domain,Category,AWS,Azure,Google Cloud,Oracle Cloud (OCI),Alibaba Cloud,Tencent Cloud,IBM Cloud";

/// Write a small but representative `data.csv` under `root`.
pub fn write_sample_csv(root: &Path) {
    let body = format!(
        "{HEADER}\n\
         Foundational,Compute,Virtual Machines,EC2,,Compute Engine,,,,\n\
         Foundational,Compute,Containers,ECS,AKS,GKE,,,,\n\
         Foundational,Data & Analytics,Data Warehouse,Redshift,Synapse,BigQuery,,MaxCompute,,\n\
         Advanced,Compute,Serverless,Lambda,Functions,Cloud Run,,,SCF,Code Engine\n"
    );
    fs::write(root.join("data.csv"), body).expect("write data.csv");
}
