//! Rule snippet catalog
//!
//! Insert-ready deny/allow rule templates keyed by policy package prefix. The
//! editor integration turns these into protocol-specific completion items;
//! here they are plain values so the catalog stays testable without any
//! editor API.

/// A named, insert-ready rule template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetCandidate {
    pub label: &'static str,
    /// Candidates apply when the declared package starts with this prefix.
    /// An empty prefix applies everywhere.
    pub package_prefix: &'static str,
    pub body: &'static str,
}

/// Catalog of canonical compliance rules, grouped by service.
pub const SNIPPETS: &[SnippetCandidate] = &[
    SnippetCandidate {
        label: "Enforce S3 Access Points in VPC Only",
        package_prefix: "aws.s3",
        body: r#"deny[msg] {
    resource := input.resource_changes[_]
    resource.type == "aws_s3_access_point"
    not resource.change.after.vpc_configuration
    msg = sprintf("S3 Access Point '%s' must be configured in a VPC", [resource.change.after.name])
}"#,
    },
    SnippetCandidate {
        label: "Enforce Public Access Blocks on S3 Access Points",
        package_prefix: "aws.s3",
        body: r#"deny[msg] {
    resource := input.resource_changes[_]
    resource.type == "aws_s3_access_point"
    not resource.change.after.public_access_block
    msg = sprintf("S3 Access Point '%s' must have public access blocks enabled", [resource.change.after.name])
}"#,
    },
    SnippetCandidate {
        label: "Prohibit ACLs on S3 Buckets",
        package_prefix: "aws.s3",
        body: r#"deny[msg] {
    resource := input.resource_changes[_]
    resource.type == "aws_s3_bucket"
    resource.change.after.acl != "private"
    msg = sprintf("S3 bucket '%s' must not use ACLs", [resource.change.after.bucket])
}"#,
    },
    SnippetCandidate {
        label: "Enforce VPC Flow Logs Enabled",
        package_prefix: "aws.vpc",
        body: r#"deny[msg] {
    resource := input.resource_changes[_]
    resource.type == "aws_vpc"
    not resource.change.after.enable_flow_logs
    msg = sprintf("VPC '%s' does not have flow logs enabled", [resource.change.after.name])
}"#,
    },
    SnippetCandidate {
        label: "Enforce Default Security Group is Closed",
        package_prefix: "aws.vpc",
        body: r#"deny[msg] {
    resource := input.resource_changes[_]
    resource.type == "aws_vpc"
    resource.change.after.default_security_group_open
    msg = sprintf("Default security group in VPC '%s' is not closed", [resource.change.after.name])
}"#,
    },
    SnippetCandidate {
        label: "Enforce Security Group Port Restriction Check",
        package_prefix: "aws.vpc",
        body: r#"deny[msg] {
    resource := input.resource_changes[_]
    resource.type == "aws_security_group"
    resource.change.after.allowed_ports[_] == "0"
    msg = sprintf("Security Group '%s' allows traffic on all ports (0)", [resource.change.after.name])
}"#,
    },
    SnippetCandidate {
        label: "Allow if no deny conditions are met",
        package_prefix: "",
        body: r#"allow {
    not deny[_]
}"#,
    },
];

/// Candidates applicable to the given declared package name.
pub fn snippets_for_package(package: &str) -> Vec<&'static SnippetCandidate> {
    SNIPPETS
        .iter()
        .filter(|candidate| package.starts_with(candidate.package_prefix))
        .collect()
}
